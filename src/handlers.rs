//! HTTP route handlers for the custom-media service.
//!
//! This module contains the HTTP route handler functions and the router that
//! wires them to the Facebook Graph service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use log::{error, info};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::facebook::FacebookGraphService;

/// Builds the application router with all routes configured.
pub fn create_app(service: Arc<FacebookGraphService>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/thumbnail/:video_id", get(handle_thumbnail))
        .with_state(service)
}

/// Handles GET requests to the root `/` endpoint.
pub async fn handle_root() -> &'static str {
    "custom-media: Facebook video thumbnails"
}

/// Handles GET requests to the `/health` endpoint.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "custom-media"
/// }
/// ```
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "custom-media"}))
}

/// Handles GET requests to the `/thumbnail/:video_id` endpoint.
///
/// Returns the Graph API response for the video's picture edge unchanged.
///
/// # Error Response
///
/// Any failure to fetch the thumbnail is reported as `502 Bad Gateway`:
///
/// ```json
/// {
///   "status": "error",
///   "message": "Failed to fetch video thumbnail",
///   "video_id": "<video id>"
/// }
/// ```
pub async fn handle_thumbnail(
    State(service): State<Arc<FacebookGraphService>>,
    Path(video_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match service.get_video_image(&video_id).await {
        Some(response) => {
            info!("Thumbnail fetched for video {}", video_id);
            Ok(Json(Value::Object(response)))
        }
        None => {
            error!("Failed to fetch thumbnail for video {}", video_id);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "status": "error",
                    "message": "Failed to fetch video thumbnail",
                    "video_id": video_id
                })),
            ))
        }
    }
}
