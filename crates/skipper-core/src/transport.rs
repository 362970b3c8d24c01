//! # Transport Seam
//!
//! The client never talks HTTP directly. It builds an [`ApiRequest`] and hands
//! it to a [`Transport`], which returns the status and body untouched.
//! Timeouts, TLS and connection reuse belong to the implementation.

use crate::error::ApiResult;
use serde_json::Value;
use url::Url;

/// HTTP methods the API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    /// The last path segment is a credential and must not be logged
    pub secret_path: bool,
}

impl ApiRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: Vec::new(),
            body: None,
            secret_path: false,
        }
    }

    pub fn post(url: Url) -> Self {
        Self {
            method: Method::Post,
            url,
            headers: Vec::new(),
            body: None,
            secret_path: false,
        }
    }

    /// Builder: add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builder: attach a JSON body and its content type
    pub fn json(self, body: Value) -> Self {
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(body);
        request
    }

    /// Builder: mark the last path segment as a credential
    pub fn with_secret_path(mut self) -> Self {
        self.secret_path = true;
        self
    }

    /// URL safe for logs and error messages
    pub fn display_url(&self) -> String {
        let mut url = self.url.clone();
        if self.secret_path {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop().push("redacted");
            }
        }
        url.to_string()
    }

    /// First value of a header, matched case-insensitively
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a response, as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for one response.
///
/// Implementations must not retry and must return non-2xx responses as
/// `Ok`; only failures that leave no response at all are errors.
pub trait Transport: Send + Sync {
    fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(RawResponse::new(299, "").is_success());
        assert!(!RawResponse::new(199, "").is_success());
        assert!(!RawResponse::new(301, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn test_request_builder() {
        let url = Url::parse("https://api.example.com/api/v1/checkout").unwrap();
        let req = ApiRequest::post(url)
            .header("x-api-key", "tok")
            .json(json!({"price_id": "p1"}));

        assert_eq!(req.method, Method::Post);
        assert_eq!(req.header_value("X-API-KEY"), Some("tok"));
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.body, Some(json!({"price_id": "p1"})));
    }

    #[test]
    fn test_display_url_hides_secret_segment() {
        let url = Url::parse("https://api.example.com/auth/validate/tok_SECRET").unwrap();

        let plain = ApiRequest::get(url.clone());
        assert_eq!(plain.display_url(), "https://api.example.com/auth/validate/tok_SECRET");

        let secret = ApiRequest::get(url).with_secret_path();
        assert_eq!(
            secret.display_url(),
            "https://api.example.com/auth/validate/redacted"
        );
        assert!(secret.url.as_str().ends_with("tok_SECRET"));
    }

    #[test]
    fn test_get_has_no_body() {
        let url = Url::parse("https://api.example.com/api/v1/products").unwrap();
        let req = ApiRequest::get(url);
        assert_eq!(req.method.to_string(), "GET");
        assert!(req.body.is_none());
        assert!(req.header_value("Content-Type").is_none());
    }
}
