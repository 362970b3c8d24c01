//! # skipper-core
//!
//! Core types for the Skipper billing API client.
//!
//! This crate provides:
//! - `Model` trait for domain values decodable from a JSON object
//! - `decode_envelope` turning a raw response into a typed `Envelope`
//! - `Price`, `Coupon`, `Customer`, `Checkout` and API key models
//! - `CheckoutRequest` and `CreateApiKeyRequest` request bodies
//! - `Transport` trait the HTTP layer implements
//! - `ApiError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use skipper_core::{decode_envelope, Coupon, RawResponse, Shape};
//!
//! let response = RawResponse::new(
//!     200,
//!     r#"{"success":true,"message":"ok","data":{"id":"c1","name":"SAVE10","percent_off":10,"duration":"once","duration_in_months":null}}"#,
//! );
//!
//! let envelope = decode_envelope::<Coupon>(&response, Shape::Single)?;
//! assert_eq!(envelope.data.as_single().map(|c| c.name.as_str()), Some("SAVE10"));
//! # Ok::<(), skipper_core::ApiError>(())
//! ```

pub mod api_key;
pub mod checkout;
pub mod coupon;
pub mod customer;
pub mod envelope;
pub mod error;
pub mod model;
pub mod product;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use api_key::{ApiKeyResponse, ValidApiKeyResponse};
pub use checkout::Checkout;
pub use coupon::Coupon;
pub use customer::Customer;
pub use envelope::{decode_envelope, Envelope, Payload, Shape};
pub use error::{ApiError, ApiResult, DecodeError};
pub use model::{JsonObject, Model};
pub use product::{BillingSchema, Price, MONTHLY_BILLING_THRESHOLD};
pub use request::{CheckoutRequest, CreateApiKeyRequest, JsonRequest};
pub use transport::{ApiRequest, Method, RawResponse, Transport};
