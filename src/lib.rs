//! # Custom Media Library
//!
//! A Rust library that looks up Facebook video thumbnails through the Graph API,
//! authenticating with the OAuth 2.0 client credentials grant.
//!
//! ## Features
//!
//! - OAuth 2.0 token exchange for the standard grant types
//! - Facebook Graph API thumbnail lookup with failures degraded to logged warnings
//! - HTTP server exposing thumbnails (`/thumbnail/:video_id`) and a health check
//!
//! ## Configuration
//!
//! - `FACEBOOK_APP_ID`: The Facebook App ID
//! - `FACEBOOK_APP_SECRET`: The Facebook App Secret
//! - `FACEBOOK_GRAPH_ENDPOINT`, `FACEBOOK_TOKEN_URL`: Optional endpoint overrides
//! - `PORT`: Server port (defaults to 3000)
//!
//! ## API Endpoints
//!
//! - `GET /`: Returns a banner
//! - `GET /health`: Returns service health status
//! - `GET /thumbnail/:video_id`: Returns the Graph API picture data for a video

pub mod config;
pub mod facebook;
pub mod handlers;
pub mod oauth;
pub mod service;

// Re-export commonly used types and functions
pub use config::{get_server_port, FacebookConfig, FacebookCredentials};
pub use facebook::{FacebookGraphService, VideoPicture};
pub use handlers::create_app;
pub use oauth::{build_bearer_auth_header, AuthLocation, GrantType, OAuthConfig, TokenResponse};
pub use service::MediaService;
