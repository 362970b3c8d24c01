//! # Checkout Sessions
//!
//! Result of `POST /api/v1/checkout`: a hosted payment page to redirect to.

use crate::error::DecodeError;
use crate::model::{required_str, JsonObject, Model};
use serde::Serialize;

/// A created checkout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkout {
    /// Where to send the customer to pay
    pub payment_url: String,
}

impl Model for Checkout {
    const NAME: &'static str = "Checkout";

    fn from_json(object: &JsonObject) -> Result<Self, DecodeError> {
        Ok(Self {
            payment_url: required_str(object, Self::NAME, "payment_url")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_checkout() {
        let checkout =
            Checkout::from_value(&json!({"payment_url": "https://pay.example.com/s/1"})).unwrap();
        assert_eq!(checkout.payment_url, "https://pay.example.com/s/1");
    }

    #[test]
    fn test_null_payment_url() {
        let err = Checkout::from_value(&json!({"payment_url": null})).unwrap_err();
        assert_eq!(err, DecodeError::missing("Checkout", "payment_url"));
    }
}
