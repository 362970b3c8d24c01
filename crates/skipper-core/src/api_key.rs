//! # API Keys
//!
//! Responses from key management (`POST /internal/management/api_key`) and
//! key validation (`GET /auth/validate/{token}`).

use crate::error::DecodeError;
use crate::model::{required_str, JsonObject, Model};
use serde::Serialize;

/// A freshly created API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyResponse {
    pub key: String,
}

impl Model for ApiKeyResponse {
    const NAME: &'static str = "ApiKeyResponse";

    fn from_json(object: &JsonObject) -> Result<Self, DecodeError> {
        Ok(Self {
            key: required_str(object, Self::NAME, "key")?,
        })
    }
}

/// Details of a key the API recognised
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidApiKeyResponse {
    pub value: String,
    pub name: String,
    /// Allowed origin ("*" for any)
    pub origin: String,
    pub purpose: String,
}

impl Model for ValidApiKeyResponse {
    const NAME: &'static str = "ValidApiKeyResponse";

    fn from_json(object: &JsonObject) -> Result<Self, DecodeError> {
        Ok(Self {
            value: required_str(object, Self::NAME, "value")?,
            name: required_str(object, Self::NAME, "name")?,
            origin: required_str(object, Self::NAME, "origin")?,
            purpose: required_str(object, Self::NAME, "purpose")?,
        })
    }
}
