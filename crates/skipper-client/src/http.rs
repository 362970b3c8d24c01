//! # HTTP Transport
//!
//! Blocking reqwest implementation of [`Transport`].

use crate::config::ClientConfig;
use reqwest::blocking::Client;
use skipper_core::{ApiError, ApiRequest, ApiResult, Method, RawResponse, Transport};
use tracing::debug;

/// Sends requests with a pooled, blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport honouring the configured timeout
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("skipper-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let display_url = request.display_url();
        debug!(method = %request.method, url = %display_url, "sending request");

        let mut builder = match request.method {
            Method::Get => self.client.get(request.url.clone()),
            Method::Post => self.client.post(request.url.clone()),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        // reqwest errors embed the full URL, which may carry the token.
        let response = builder.send().map_err(|e| {
            let e = e.without_url();
            debug!(url = %display_url, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ApiError::Transport(e.without_url().to_string()))?;

        debug!(url = %display_url, status, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }
}
