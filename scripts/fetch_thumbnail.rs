//! Facebook Video Thumbnail Lookup Utility
//!
//! Fetches the Graph API picture data for a single video using the
//! `FACEBOOK_APP_ID` and `FACEBOOK_APP_SECRET` environment variables.

use custom_media::{FacebookGraphService, VideoPicture};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    println!("🎬 Facebook Video Thumbnail Lookup");
    println!("==================================");

    let video_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => {
            print!("Enter the Facebook video ID: ");
            io::stdout().flush()?;
            let mut video_id = String::new();
            io::stdin().read_line(&mut video_id)?;
            video_id.trim().to_string()
        }
    };

    if video_id.is_empty() {
        return Err("A video ID is required".into());
    }

    let service = FacebookGraphService::from_env(reqwest::Client::new());
    if !service.config().has_credentials() {
        return Err("Set FACEBOOK_APP_ID and FACEBOOK_APP_SECRET before running this tool".into());
    }

    println!("\n🔄 Fetching thumbnail for video {}...", video_id);
    let response = service
        .get_video_image(&video_id)
        .await
        .ok_or("Thumbnail lookup failed, see the log output for details")?;

    println!("\n✅ Graph API response:");
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(response.clone()))?
    );

    if let Some(picture) = VideoPicture::from_response(&response) {
        println!("\n🖼️  Thumbnail URL: {}", picture.url);
    }

    Ok(())
}
