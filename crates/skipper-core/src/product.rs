//! # Product Prices
//!
//! Prices as listed by `GET /api/v1/products`. Each price embeds the raw
//! product record the billing backend stores alongside it.

use crate::error::DecodeError;
use crate::model::{optional_value, required_i64, required_object, required_str, JsonObject, Model};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Amounts strictly above this (in cents) bill monthly
pub const MONTHLY_BILLING_THRESHOLD: i64 = 300_000;

/// How often a price is billed, derived from its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingSchema {
    Weekly,
    Monthly,
}

impl BillingSchema {
    pub fn for_amount(amount: i64) -> Self {
        if amount > MONTHLY_BILLING_THRESHOLD {
            BillingSchema::Monthly
        } else {
            BillingSchema::Weekly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingSchema::Weekly => "weekly",
            BillingSchema::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for BillingSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    /// Identifier used when starting a checkout
    pub external_id: String,

    /// Product record, passed through as sent
    pub product: JsonObject,

    /// ISO 4217 code, lowercase (e.g. "usd")
    pub currency: String,

    /// Amount in the smallest currency unit
    pub amount: i64,

    /// Payment processor price object, if the backend attached one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_data: Option<Value>,

    /// Computed from `amount` when decoded
    pub billing_schema: BillingSchema,
}

impl Price {
    /// Whole units of the amount (cents dropped), as a string
    pub fn to_dollar(&self) -> String {
        (self.amount / 100).to_string()
    }

    /// Product name, when the embedded record has one
    pub fn product_name(&self) -> Option<&str> {
        self.product.get("name").and_then(|v| v.as_str())
    }
}

impl Model for Price {
    const NAME: &'static str = "Price";

    fn from_json(object: &JsonObject) -> Result<Self, DecodeError> {
        let amount = required_i64(object, Self::NAME, "amount")?;

        Ok(Self {
            external_id: required_str(object, Self::NAME, "external_id")?,
            product: required_object(object, Self::NAME, "product")?,
            currency: required_str(object, Self::NAME, "currency")?,
            amount,
            stripe_data: optional_value(object, "stripe_data"),
            billing_schema: BillingSchema::for_amount(amount),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn price(amount: i64) -> Price {
        Price::from_value(&json!({
            "external_id": "p1",
            "product": {"name": "Pro"},
            "currency": "usd",
            "amount": amount,
            "stripe_data": null
        }))
        .unwrap()
    }

    #[test]
    fn test_billing_schema_boundary() {
        assert_eq!(price(300_000).billing_schema, BillingSchema::Weekly);
        assert_eq!(price(300_001).billing_schema, BillingSchema::Monthly);
        assert_eq!(price(0).billing_schema, BillingSchema::Weekly);
        assert_eq!(price(500_000).billing_schema.as_str(), "monthly");
    }

    #[test]
    fn test_decode_fields() {
        let p = price(1999);
        assert_eq!(p.external_id, "p1");
        assert_eq!(p.currency, "usd");
        assert_eq!(p.product_name(), Some("Pro"));
        assert_eq!(p.stripe_data, None);
    }

    #[test]
    fn test_stripe_data_passthrough() {
        let p = Price::from_value(&json!({
            "external_id": "p2",
            "product": {},
            "currency": "eur",
            "amount": 100,
            "stripe_data": {"id": "price_123", "recurring": {"interval": "month"}}
        }))
        .unwrap();
        assert_eq!(p.stripe_data.unwrap()["id"], "price_123");
    }

    #[test]
    fn test_to_dollar_truncates() {
        assert_eq!(price(1999).to_dollar(), "19");
        assert_eq!(price(500_000).to_dollar(), "5000");
        assert_eq!(price(99).to_dollar(), "0");
    }

    #[test]
    fn test_missing_required_fields() {
        for field in ["external_id", "product", "currency", "amount"] {
            let mut obj = json!({
                "external_id": "p1",
                "product": {},
                "currency": "usd",
                "amount": 100
            });
            obj.as_object_mut().unwrap().remove(field);

            assert_eq!(
                Price::from_value(&obj).unwrap_err(),
                DecodeError::missing("Price", field)
            );
        }
    }

    #[test]
    fn test_serialized_schema_is_lowercase() {
        let value = serde_json::to_value(price(10)).unwrap();
        assert_eq!(value["billing_schema"], "weekly");
        assert!(value.get("stripe_data").is_none());
    }
}
