//! Facebook Graph API integration module.
//!
//! This module contains the service that looks up video thumbnails through the
//! Graph API using OAuth 2.0 client credentials authentication.

mod graph;
mod picture;

pub use graph::{FacebookGraphService, GRAPH_BASE_ENDPOINT, GRAPH_TOKEN_URL};
pub use picture::VideoPicture;
