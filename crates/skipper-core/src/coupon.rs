//! # Coupons
//!
//! Discount coupons looked up by code.

use crate::error::DecodeError;
use crate::model::{optional_i64, required_f64, required_str, JsonObject, Model};
use serde::Serialize;

/// A discount coupon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coupon {
    pub id: String,

    /// Code customers enter (e.g. "SAVE10")
    pub name: String,

    /// Discount percentage
    pub percent_off: f64,

    /// "once", "repeating" or "forever"
    pub duration: String,

    /// Only set for repeating coupons
    pub duration_in_months: Option<i64>,
}

impl Model for Coupon {
    const NAME: &'static str = "Coupon";

    fn from_json(object: &JsonObject) -> Result<Self, DecodeError> {
        Ok(Self {
            id: required_str(object, Self::NAME, "id")?,
            name: required_str(object, Self::NAME, "name")?,
            percent_off: required_f64(object, Self::NAME, "percent_off")?,
            duration: required_str(object, Self::NAME, "duration")?,
            duration_in_months: optional_i64(object, Self::NAME, "duration_in_months")?,
        })
    }
}
