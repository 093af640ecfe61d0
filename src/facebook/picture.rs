//! Typed view of the Graph API `picture` edge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Thumbnail returned by `/{video_id}/picture?redirect=0`.
///
/// The Graph API wraps it in a `data` object:
///
/// ```json
/// {"data": {"url": "https://...", "width": 130, "height": 73, "is_silhouette": false}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPicture {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub is_silhouette: bool,
}

impl VideoPicture {
    /// Extracts the picture from a decoded Graph API response.
    ///
    /// Returns `None` if there is no `data` object or it carries no `url`.
    pub fn from_response(response: &Map<String, Value>) -> Option<Self> {
        let data = response.get("data")?;
        data.get("url")?.as_str()?;
        serde_json::from_value(data.clone()).ok()
    }
}
