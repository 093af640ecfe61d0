//! Configuration module for the custom-media service.
//!
//! This module contains configuration structures and environment variable handling
//! for the Facebook Graph API integration.

use log::{debug, info, warn};
use std::env;
use std::fmt;

use crate::facebook::{GRAPH_BASE_ENDPOINT, GRAPH_TOKEN_URL};

/// Masks a non-secret value for logging, keeping at most the first and last eight characters.
///
/// Values of eight characters or fewer are reduced to their prefix followed by `...`,
/// values up to sixteen characters keep only the first eight.
///
/// # Example
///
/// ```rust
/// use custom_media::config::mask_secret;
///
/// assert_eq!(mask_secret("abcdefghijklmnopqrstuvwxyz"), "abcdefgh...stuvwxyz");
/// assert_eq!(mask_secret("abcdefghij"), "abcdefgh...");
/// ```
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    let prefix: String = chars.iter().take(8).collect();

    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}

/// Describes a secret for logging without revealing any of its characters.
///
/// # Example
///
/// ```rust
/// use custom_media::config::redact_secret;
///
/// assert_eq!(redact_secret("app_secret_value"), "<redacted, 16 chars>");
/// ```
pub fn redact_secret(value: &str) -> String {
    format!("<redacted, {} chars>", value.chars().count())
}

/// The Facebook app credentials used for the client credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct FacebookCredentials {
    /// The Facebook App ID
    pub app_id: String,
    /// The Facebook App Secret
    pub app_secret: String,
}

impl fmt::Debug for FacebookCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacebookCredentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &redact_secret(&self.app_secret))
            .finish()
    }
}

/// Configuration struct for the Facebook Graph API.
///
/// Credentials are optional: a service built without them logs an error and never
/// contacts the Graph API. The endpoints default to the public Graph API and can be
/// overridden for staging or tests.
#[derive(Debug, Clone)]
pub struct FacebookConfig {
    /// App ID and secret, or `None` if either is missing or empty
    pub credentials: Option<FacebookCredentials>,
    /// Graph API base endpoint, always ending in `/`
    pub base_endpoint: String,
    /// OAuth 2.0 token endpoint
    pub token_url: String,
}

impl Default for FacebookConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_endpoint: GRAPH_BASE_ENDPOINT.to_string(),
            token_url: GRAPH_TOKEN_URL.to_string(),
        }
    }
}

impl FacebookConfig {
    /// Builds a configuration from raw credential values.
    ///
    /// Both values must be present and non-empty for the credentials to be usable;
    /// otherwise `credentials` is `None`.
    pub fn from_values(app_id: Option<String>, app_secret: Option<String>) -> Self {
        let credentials = match (app_id, app_secret) {
            (Some(app_id), Some(app_secret)) if !app_id.is_empty() && !app_secret.is_empty() => {
                Some(FacebookCredentials { app_id, app_secret })
            }
            _ => None,
        };

        Self {
            credentials,
            ..Self::default()
        }
    }

    /// Creates a new `FacebookConfig` by loading credentials from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FACEBOOK_APP_ID`: The Facebook App ID
    /// - `FACEBOOK_APP_SECRET`: The Facebook App Secret
    /// - `FACEBOOK_GRAPH_ENDPOINT` (optional): Overrides the Graph API base endpoint
    /// - `FACEBOOK_TOKEN_URL` (optional): Overrides the OAuth 2.0 token endpoint
    ///
    /// Missing credentials are not an error here; the service decides how to degrade.
    ///
    /// # Example
    ///
    /// ```rust
    /// use custom_media::FacebookConfig;
    ///
    /// std::env::set_var("FACEBOOK_APP_ID", "1234567890");
    /// std::env::set_var("FACEBOOK_APP_SECRET", "app_secret_value");
    ///
    /// let config = FacebookConfig::from_env();
    /// assert!(config.has_credentials());
    /// ```
    pub fn from_env() -> Self {
        info!("Loading Facebook configuration from environment variables");

        let app_id = read_env_var("FACEBOOK_APP_ID", false);
        let app_secret = read_env_var("FACEBOOK_APP_SECRET", true);

        let mut config = Self::from_values(app_id, app_secret);

        if let Some(endpoint) = read_env_var("FACEBOOK_GRAPH_ENDPOINT", false) {
            config.base_endpoint = normalize_base_endpoint(&endpoint);
        }
        if let Some(token_url) = read_env_var("FACEBOOK_TOKEN_URL", false) {
            config.token_url = token_url;
        }

        if config.has_credentials() {
            info!("Facebook configuration loaded successfully");
        } else {
            warn!("Facebook credentials are incomplete - Graph API calls will be skipped");
        }
        debug!(
            "Graph endpoint: {}, token URL: {}",
            config.base_endpoint, config.token_url
        );

        config
    }

    /// Points the configuration at different Graph API and token endpoints.
    pub fn with_endpoints(mut self, base_endpoint: &str, token_url: &str) -> Self {
        self.base_endpoint = normalize_base_endpoint(base_endpoint);
        self.token_url = token_url.to_string();
        self
    }

    /// Returns true if both the app ID and app secret are available.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Reads a non-empty environment variable; secrets are never logged beyond their length.
fn read_env_var(name: &str, secret: bool) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => {
            info!(
                "Found {} environment variable with length: {}",
                name,
                value.len()
            );
            if !secret {
                debug!("{} (masked): {}", name, mask_secret(&value));
            }
            Some(value)
        }
        Ok(_) => {
            warn!("{} environment variable is set but empty", name);
            None
        }
        Err(_) => {
            info!("No {} found in environment variables", name);
            None
        }
    }
}

fn normalize_base_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    }
}

/// Gets the server port from environment variables or returns the default.
///
/// This function reads the `PORT` environment variable and parses it as a u16.
/// If the environment variable is not set, it defaults to 3000.
///
/// # Panics
///
/// This function will panic if the `PORT` environment variable is set to a value
/// that cannot be parsed as a valid port number.
pub fn get_server_port() -> u16 {
    env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a valid number")
}
