//! Graph API client for video thumbnails.

use log::{debug, error, info, warn};
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::FacebookConfig;
use crate::oauth::{sanitize_for_logging, OAuthConfig};
use crate::service::MediaService;

use super::picture::VideoPicture;

/// The Graph API base endpoint.
pub const GRAPH_BASE_ENDPOINT: &str = "https://graph.facebook.com/v8.0/";

/// The Graph API OAuth 2.0 token endpoint.
pub const GRAPH_TOKEN_URL: &str = "https://graph.facebook.com/oauth/access_token";

const LOG_TARGET: &str = "media";

/// Methods for accessing the Facebook Graph API.
#[derive(Debug, Clone)]
pub struct FacebookGraphService {
    media: MediaService,
    config: FacebookConfig,
}

impl FacebookGraphService {
    /// Creates the service from a base media service and a Facebook configuration.
    ///
    /// If the credentials are missing an error is logged, and every later call skips
    /// the Graph API entirely.
    pub fn new(media: MediaService, config: FacebookConfig) -> Self {
        if !config.has_credentials() {
            error!(
                target: LOG_TARGET,
                "Cannot add a Facebook post or video thumbnail because credentials are missing on the server."
            );
        }
        Self { media, config }
    }

    /// Creates the service with credentials read from `FACEBOOK_APP_ID` and `FACEBOOK_APP_SECRET`.
    pub fn from_env(http_client: Client) -> Self {
        Self::new(MediaService::new(http_client), FacebookConfig::from_env())
    }

    pub fn config(&self) -> &FacebookConfig {
        &self.config
    }

    /// Acquires the authentication headers for a Graph API call.
    ///
    /// A new client credentials exchange is made on every call. Without credentials
    /// this returns an empty header map and makes no request.
    pub async fn auth_headers(&self) -> Result<HeaderMap, Box<dyn std::error::Error + Send + Sync>> {
        let Some(credentials) = self.config.credentials.as_ref() else {
            debug!("No Facebook credentials configured, returning empty headers");
            return Ok(HeaderMap::new());
        };

        let oauth_config = OAuthConfig::new(
            &self.config.token_url,
            &credentials.app_id,
            &credentials.app_secret,
        );

        self.media
            .get_oauth2_headers(&self.config.base_endpoint, "client_credentials", &oauth_config)
            .await
    }

    /// Returns true if the video ID can be used as a single Graph API path segment.
    ///
    /// Graph object IDs are numeric or `<page>_<post>` pairs, so only ASCII
    /// alphanumerics, `_` and `-` are accepted. This keeps `.`/`..` and separators
    /// from moving the request outside the versioned base endpoint.
    pub fn is_valid_video_id(video_id: &str) -> bool {
        !video_id.is_empty()
            && video_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    /// Builds the thumbnail URI for a video ID.
    pub fn picture_url(&self, video_id: &str) -> String {
        format!(
            "{}{}/picture?redirect=0",
            self.config.base_endpoint,
            urlencoding::encode(video_id)
        )
    }

    /// Retrieves the thumbnail image data for a given video ID.
    ///
    /// # Parameters
    ///
    /// - `video_id`: The Facebook video ID
    ///
    /// # Returns
    ///
    /// - `Some(Map<String, Value>)`: The decoded Graph API response
    /// - `None`: If the video ID is invalid, credentials are missing, or any part of the
    ///   call failed; the failure is logged as a warning
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use custom_media::FacebookGraphService;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let service = FacebookGraphService::from_env(reqwest::Client::new());
    ///     if let Some(response) = service.get_video_image("10153231379946729").await {
    ///         println!("{}", serde_json::Value::Object(response));
    ///     }
    /// }
    /// ```
    pub async fn get_video_image(&self, video_id: &str) -> Option<Map<String, Value>> {
        if !Self::is_valid_video_id(video_id) {
            warn!(
                target: LOG_TARGET,
                "Rejecting thumbnail lookup for invalid video ID '{}'",
                sanitize_for_logging(video_id, 64)
            );
            return None;
        }

        if !self.config.has_credentials() {
            warn!(
                target: LOG_TARGET,
                "Skipping thumbnail lookup for video {}: Facebook credentials are missing",
                video_id
            );
            return None;
        }

        match self.fetch_video_image(video_id).await {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(target: LOG_TARGET, "{}", e);
                None
            }
        }
    }

    /// Retrieves the thumbnail for a video as a typed `VideoPicture`.
    pub async fn get_video_thumbnail(&self, video_id: &str) -> Option<VideoPicture> {
        let response = self.get_video_image(video_id).await?;
        let picture = VideoPicture::from_response(&response);
        if picture.is_none() {
            warn!(
                target: LOG_TARGET,
                "Graph API response for video {} has no picture data",
                video_id
            );
        }
        picture
    }

    async fn fetch_video_image(
        &self,
        video_id: &str,
    ) -> Result<Map<String, Value>, Box<dyn std::error::Error + Send + Sync>> {
        let headers = self.auth_headers().await?;

        let uri = self.picture_url(video_id);
        info!("Fetching thumbnail for video {} from {}", video_id, uri);

        let response = self
            .media
            .http_client()
            .get(&uri)
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!(
                "Graph API request for video {} failed ({}): {}",
                video_id,
                status,
                sanitize_for_logging(&error_text, 200)
            )
            .into());
        }

        let body: Value = response.json().await?;
        debug!("Graph API response decoded for video {}", video_id);

        match body {
            Value::Object(map) => Ok(map),
            other => Err(format!(
                "Graph API response for video {} is not a JSON object: {}",
                video_id,
                sanitize_for_logging(&other.to_string(), 200)
            )
            .into()),
        }
    }
}
