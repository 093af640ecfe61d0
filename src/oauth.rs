//! OAuth 2.0 authentication module for API integrations.
//!
//! This module exchanges client credentials (and the other standard grant types) for
//! a bearer token at a token endpoint, and builds the `Authorization` header value
//! that carries it. Tokens are never cached; every exchange is a fresh request.

use log::{debug, error, info};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::config::redact_secret;

/// The OAuth 2.0 grant types understood by the token exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    AuthorizationCode,
    ClientCredentials,
    JwtBearer,
    Password,
    RefreshToken,
}

impl GrantType {
    /// Returns the `grant_type` value sent to the token endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::JwtBearer => "urn:ietf:params:oauth:grant-type:jwt-bearer",
            GrantType::Password => "password",
            GrantType::RefreshToken => "refresh_token",
        }
    }

    /// Configuration parameters that must be present for this grant type.
    pub fn required_params(&self) -> &'static [&'static str] {
        match self {
            GrantType::AuthorizationCode => &["code"],
            GrantType::ClientCredentials => &[],
            GrantType::JwtBearer => &["assertion"],
            GrantType::Password => &["username", "password"],
            GrantType::RefreshToken => &["refresh_token"],
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrantType {
    type Err = Box<dyn std::error::Error + Send + Sync>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorization_code" => Ok(GrantType::AuthorizationCode),
            "client_credentials" => Ok(GrantType::ClientCredentials),
            "urn:ietf:params:oauth:grant-type:jwt-bearer" => Ok(GrantType::JwtBearer),
            "password" => Ok(GrantType::Password),
            "refresh_token" => Ok(GrantType::RefreshToken),
            other => Err(format!("Unrecognized grant_type {}.", other).into()),
        }
    }
}

/// Where the client ID and secret are placed in the token request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthLocation {
    /// HTTP Basic authentication header
    #[default]
    Header,
    /// `client_id` and `client_secret` form fields
    Body,
}

/// Configuration values for retrieving an OAuth 2.0 token.
#[derive(Clone)]
pub struct OAuthConfig {
    /// Token endpoint, absolute or relative to the base URI of the exchange
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: Option<String>,
    pub auth_location: AuthLocation,
    /// Grant specific parameters such as `code`, `username` or `refresh_token`
    pub params: BTreeMap<String, String>,
}

impl OAuthConfig {
    pub fn new(token_url: &str, client_id: &str, client_secret: &str) -> Self {
        Self {
            token_url: token_url.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            scope: None,
            auth_location: AuthLocation::default(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_auth_location(mut self, auth_location: AuthLocation) -> Self {
        self.auth_location = auth_location;
        self
    }

    /// Checks that every parameter the grant type needs is present and non-empty.
    pub fn validate_for(
        &self,
        grant_type: GrantType,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for key in grant_type.required_params() {
            match self.params.get(*key) {
                Some(value) if !value.is_empty() => {}
                _ => {
                    return Err(format!(
                        "Missing required configuration key '{}' for grant_type {}",
                        key, grant_type
                    )
                    .into())
                }
            }
        }
        Ok(())
    }

    /// Builds the form fields sent to the token endpoint.
    fn form_fields(&self, grant_type: GrantType) -> Vec<(&str, &str)> {
        let mut fields = vec![("grant_type", grant_type.as_str())];
        if let Some(scope) = self.scope.as_deref() {
            fields.push(("scope", scope));
        }
        if self.auth_location == AuthLocation::Body {
            fields.push(("client_id", self.client_id.as_str()));
            fields.push(("client_secret", self.client_secret.as_str()));
        }
        for (key, value) in &self.params {
            fields.push((key.as_str(), value.as_str()));
        }
        fields
    }
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact_secret(&self.client_secret))
            .field("scope", &self.scope)
            .field("auth_location", &self.auth_location)
            .field("params", &self.params.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Successful response from a token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_expires_in")]
    pub expires_in: Option<u64>,
}

/// Accepts `expires_in` as a number or a numeric string; anything else is ignored.
fn deserialize_expires_in<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ExpiresIn {
        Seconds(u64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<ExpiresIn>::deserialize(deserializer)? {
        Some(ExpiresIn::Seconds(seconds)) => Some(seconds),
        Some(ExpiresIn::Text(text)) => text.trim().parse().ok(),
        Some(ExpiresIn::Other(_)) | None => None,
    })
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// Newlines and tabs become spaces, other control characters become `?`, and text
/// longer than `max_len` characters is cut off with a note of its original size.
pub fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!(
            "{}... [truncated, {} total bytes]",
            truncated,
            text.len()
        )
    } else {
        sanitized
    }
}

/// Resolves the token endpoint against the base URI of the API.
///
/// An absolute `token_url` is used as is; a relative one is joined onto `base_uri`.
pub fn resolve_token_url(
    base_uri: &str,
    token_url: &str,
) -> Result<Url, Box<dyn std::error::Error + Send + Sync>> {
    match Url::parse(token_url) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(base_uri)
                .map_err(|e| format!("Invalid base URI '{}': {}", base_uri, e))?;
            Ok(base.join(token_url)?)
        }
        Err(e) => Err(format!("Invalid token URL '{}': {}", token_url, e).into()),
    }
}

/// Exchanges the configured credentials for an access token.
///
/// This performs a single `POST` to the token endpoint with a form encoded body. There
/// is no retry and the returned token is not cached.
///
/// # Parameters
///
/// - `client`: The HTTP client used for the exchange
/// - `base_uri`: Base URI the token URL is resolved against when it is relative
/// - `grant_type`: The grant to request
/// - `config`: Client credentials and grant parameters
///
/// # Returns
///
/// - `Ok(TokenResponse)`: The token issued by the endpoint
/// - `Err(Box<dyn std::error::Error + Send + Sync>)`: Missing grant parameters, a network
///   failure, a non-success status, or a body without an `access_token`
pub async fn request_access_token(
    client: &Client,
    base_uri: &str,
    grant_type: GrantType,
    config: &OAuthConfig,
) -> Result<TokenResponse, Box<dyn std::error::Error + Send + Sync>> {
    config.validate_for(grant_type)?;

    let url = resolve_token_url(base_uri, &config.token_url)?;
    info!("Requesting OAuth 2.0 token ({}) from {}", grant_type, url);
    debug!("Token request configuration: {:?}", config);

    let body = serde_urlencoded::to_string(config.form_fields(grant_type))?;

    let mut request = client
        .post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(body);
    if config.auth_location == AuthLocation::Header {
        request = request.basic_auth(&config.client_id, Some(&config.client_secret));
    }

    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        error!("Token request failed - Status: {}", status);
        return Err(format!(
            "Token endpoint returned {}: {}",
            status,
            sanitize_for_logging(&error_text, 200)
        )
        .into());
    }

    let token: TokenResponse = response.json().await?;
    info!(
        "Received access token (type: {}, expires in: {:?})",
        token.token_type.as_deref().unwrap_or("unspecified"),
        token.expires_in
    );
    debug!("Access token: {}", redact_secret(&token.access_token));

    Ok(token)
}

/// Builds the Authorization header value for OAuth 2.0 Bearer Token authentication.
///
/// # Example
///
/// ```rust
/// use custom_media::build_bearer_auth_header;
///
/// let header = build_bearer_auth_header("your_access_token");
/// assert_eq!(header, "Bearer your_access_token");
/// ```
pub fn build_bearer_auth_header(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}
