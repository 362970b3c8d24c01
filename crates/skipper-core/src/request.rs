//! # Request Bodies
//!
//! Typed JSON bodies for the POST endpoints. Each body validates itself before
//! it is serialized, so a request with empty required fields never leaves the
//! process.

use crate::error::{ApiError, ApiResult};
use serde::Serialize;
use serde_json::Value;

/// A request body sent as JSON
pub trait JsonRequest: Serialize {
    /// Check required fields
    fn validate(&self) -> ApiResult<()>;

    /// Validate, then serialize to the canonical JSON body
    fn to_json(&self) -> ApiResult<Value> {
        self.validate()?;
        serde_json::to_value(self).map_err(|e| ApiError::InvalidRequest(e.to_string()))
    }
}

fn require(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Body of `POST /internal/management/api_key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateApiKeyRequest {
    /// Allowed request origin ("*" for any)
    pub origin: String,
    pub name: String,
    pub purpose: String,
}

impl CreateApiKeyRequest {
    pub fn new(
        origin: impl Into<String>,
        name: impl Into<String>,
        purpose: impl Into<String>,
    ) -> ApiResult<Self> {
        let request = Self {
            origin: origin.into(),
            name: name.into(),
            purpose: purpose.into(),
        };
        request.validate()?;
        Ok(request)
    }
}

impl Default for CreateApiKeyRequest {
    fn default() -> Self {
        Self {
            origin: "*".to_string(),
            name: "new_api_key".to_string(),
            purpose: "general".to_string(),
        }
    }
}

impl JsonRequest for CreateApiKeyRequest {
    fn validate(&self) -> ApiResult<()> {
        require("origin", &self.origin)?;
        require("name", &self.name)?;
        require("purpose", &self.purpose)
    }
}

/// Body of `POST /api/v1/checkout`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    /// `external_id` of the price being bought
    pub price_id: String,
    pub company_name: String,
    pub project_name: String,

    /// Coupon code to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,

    /// Prefill for the payment page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CheckoutRequest {
    pub fn new(
        price_id: impl Into<String>,
        company_name: impl Into<String>,
        project_name: impl Into<String>,
    ) -> ApiResult<Self> {
        let request = Self {
            price_id: price_id.into(),
            company_name: company_name.into(),
            project_name: project_name.into(),
            coupon: None,
            email: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// Builder: apply a coupon code
    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    /// Builder: prefill the customer email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl JsonRequest for CheckoutRequest {
    fn validate(&self) -> ApiResult<()> {
        require("price_id", &self.price_id)?;
        require("company_name", &self.company_name)?;
        require("project_name", &self.project_name)?;
        if let Some(ref coupon) = self.coupon {
            require("coupon", coupon)?;
        }
        if let Some(ref email) = self.email {
            if !email.contains('@') {
                return Err(ApiError::InvalidRequest(format!(
                    "email is not an address: {}",
                    email
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_api_key_request() {
        let body = CreateApiKeyRequest::default().to_json().unwrap();
        assert_eq!(
            body,
            json!({"origin": "*", "name": "new_api_key", "purpose": "general"})
        );
    }

    #[test]
    fn test_api_key_request_rejects_blank() {
        let err = CreateApiKeyRequest::new("*", "  ", "general").unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(msg) if msg.contains("name")));
    }

    #[test]
    fn test_checkout_request_json() {
        let body = CheckoutRequest::new("p1", "Acme", "rockets")
            .unwrap()
            .to_json()
            .unwrap();
        assert_eq!(
            body,
            json!({"price_id": "p1", "company_name": "Acme", "project_name": "rockets"})
        );

        let body = CheckoutRequest::new("p1", "Acme", "rockets")
            .unwrap()
            .with_coupon("SAVE10")
            .with_email("ops@acme.io")
            .to_json()
            .unwrap();
        assert_eq!(body["coupon"], "SAVE10");
        assert_eq!(body["email"], "ops@acme.io");
    }

    #[test]
    fn test_checkout_request_validation() {
        assert!(CheckoutRequest::new("", "Acme", "rockets").is_err());
        assert!(CheckoutRequest::new("p1", "", "rockets").is_err());
        assert!(CheckoutRequest::new("p1", "Acme", "").is_err());

        let bad_email = CheckoutRequest::new("p1", "Acme", "rockets")
            .unwrap()
            .with_email("nope");
        assert!(bad_email.to_json().is_err());
    }
}
