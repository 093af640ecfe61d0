//! Base service for media API consumers.
//!
//! `MediaService` owns the shared HTTP client and knows how to turn an OAuth 2.0
//! configuration into request headers. API specific services compose it.

use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

use crate::oauth::{build_bearer_auth_header, request_access_token, GrantType, OAuthConfig};

#[derive(Debug, Clone, Default)]
pub struct MediaService {
    http_client: Client,
}

impl MediaService {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Creates a service with a default HTTP client.
    pub fn create() -> Self {
        Self::new(Client::new())
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Retrieves OAuth 2.0 authentication headers for an API.
    ///
    /// The grant type is parsed before anything else, so an unrecognized grant type
    /// fails without touching the network. Otherwise a token is requested from the
    /// configured token endpoint and wrapped in a single `Authorization` header.
    ///
    /// # Parameters
    ///
    /// - `base_uri`: The API endpoint URI, used to resolve a relative token URL
    /// - `grant_type`: The grant type name, e.g. `client_credentials`
    /// - `config`: Configuration values for retrieving the token
    ///
    /// # Returns
    ///
    /// - `Ok(HeaderMap)`: `Authorization: Bearer <token>`
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: Unknown grant type, missing grant
    ///   parameters, or a failed token exchange
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use custom_media::{MediaService, OAuthConfig};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let service = MediaService::create();
    ///     let config = OAuthConfig::new(
    ///         "https://graph.facebook.com/oauth/access_token",
    ///         "app_id",
    ///         "app_secret",
    ///     );
    ///     let headers = service
    ///         .get_oauth2_headers("https://graph.facebook.com/v8.0/", "client_credentials", &config)
    ///         .await
    ///         .unwrap();
    ///     println!("{:?}", headers);
    /// }
    /// ```
    pub async fn get_oauth2_headers(
        &self,
        base_uri: &str,
        grant_type: &str,
        config: &OAuthConfig,
    ) -> Result<HeaderMap, Box<dyn std::error::Error + Send + Sync>> {
        let grant_type: GrantType = grant_type.parse()?;
        debug!("Acquiring OAuth 2.0 headers using grant type {}", grant_type);

        let token = request_access_token(&self.http_client, base_uri, grant_type, config).await?;

        let mut value = HeaderValue::from_str(&build_bearer_auth_header(&token.access_token))
            .map_err(|e| format!("Access token is not a valid header value: {}", e))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        info!("OAuth 2.0 authorization header acquired");

        Ok(headers)
    }
}
