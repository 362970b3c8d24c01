//! # Client Configuration
//!
//! Where the API lives and which key to present.
//! Loaded from environment variables or a `skipper.toml` file.

use serde::Deserialize;
use skipper_core::{ApiError, ApiResult};
use std::env;
use std::path::Path;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Skipper API configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URI (scheme, host and optional path prefix)
    pub base_uri: Url,

    /// API key sent as `x-api-key`
    pub api_token: String,

    /// Per-request timeout handed to the transport
    pub timeout: Duration,
}

/// On-disk form of the configuration
#[derive(Debug, Deserialize)]
struct FileConfig {
    uri: String,
    token: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Create config with explicit values
    pub fn new(base_uri: &str, api_token: impl Into<String>) -> ApiResult<Self> {
        let base_uri = parse_base_uri(base_uri)?;

        let api_token = api_token.into().trim().to_string();
        if api_token.is_empty() {
            return Err(ApiError::Configuration("API token is empty".to_string()));
        }

        Ok(Self {
            base_uri,
            api_token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SKIPPER_URI`
    /// - `SKIPPER_TOKEN`
    ///
    /// Optional: `SKIPPER_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let uri = env::var("SKIPPER_URI")
            .map_err(|_| ApiError::Configuration("SKIPPER_URI not set".to_string()))?;

        let token = env::var("SKIPPER_TOKEN")
            .map_err(|_| ApiError::Configuration("SKIPPER_TOKEN not set".to_string()))?;

        let mut config = Self::new(&uri, token)?;

        if let Ok(secs) = env::var("SKIPPER_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ApiError::Configuration(format!("SKIPPER_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Parse a TOML document with `uri`, `token` and optional `timeout_secs`
    pub fn from_toml_str(toml_str: &str) -> ApiResult<Self> {
        let file: FileConfig = toml::from_str(toml_str)
            .map_err(|e| ApiError::Configuration(format!("invalid config file: {}", e)))?;

        let config = Self::new(&file.uri, file.token)?;
        Ok(match file.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }

    /// Load a TOML config file from disk
    pub fn from_file(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Builder: set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an endpoint below the base URI.
    ///
    /// Each segment is trimmed and percent-encoded as one path segment.
    /// A segment that is blank after trimming is rejected.
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(ApiError::InvalidRequest(
                "path parameter must not be empty".to_string(),
            ));
        }

        let mut url = self.base_uri.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::Configuration(format!("base URI cannot hold a path: {}", self.base_uri))
            })?
            .pop_if_empty()
            .extend(segments.iter().map(|s| s.trim()));
        Ok(url)
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_uri", &self.base_uri.as_str())
            .field("api_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_base_uri(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::Configuration(format!("invalid base URI {:?}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::Configuration(format!(
            "base URI must be http or https: {}",
            raw
        )));
    }

    Ok(url)
}
