//! # Custom Media
//!
//! A Rust web service that serves Facebook video thumbnails fetched from the Graph API
//! using OAuth 2.0 client credentials authentication.
//!
//! ## Environment Variables
//!
//! - `FACEBOOK_APP_ID`: The Facebook App ID
//! - `FACEBOOK_APP_SECRET`: The Facebook App Secret
//! - `PORT`: Server port (defaults to 3000)
//!
//! ## API Endpoints
//!
//! - `GET /`: Returns a banner
//! - `GET /health`: Returns service health status
//! - `GET /thumbnail/:video_id`: Returns the Graph API picture data for a video

use custom_media::{create_app, get_server_port, FacebookGraphService};
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Main entry point for the custom-media web service.
///
/// Initializes logging, loads the Facebook configuration from the environment and
/// serves the HTTP routes until the process receives Ctrl-C.
///
/// # Example Usage
///
/// ```bash
/// # Run on the default port 3000
/// FACEBOOK_APP_ID=... FACEBOOK_APP_SECRET=... cargo run
///
/// # Run with debug logging
/// RUST_LOG=debug cargo run
/// ```
///
/// # Panics
///
/// This function will panic if the server port cannot be bound.
#[tokio::main]
async fn main() {
    env_logger::init();

    let service = Arc::new(FacebookGraphService::from_env(reqwest::Client::new()));

    let app = create_app(service).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting custom-media server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("HTTP server error: {}", e);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
