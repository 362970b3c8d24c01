//! # skipper-client
//!
//! Blocking client for the Skipper billing API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skipper_client::SkipperClient;
//! use skipper_core::CheckoutRequest;
//!
//! // Reads SKIPPER_URI and SKIPPER_TOKEN (a .env file is honoured)
//! let client = SkipperClient::from_env()?;
//!
//! for price in client.products()?.data.into_list().unwrap_or_default() {
//!     println!("{} {} ({})", price.external_id, price.to_dollar(), price.billing_schema);
//! }
//!
//! if client.valid_coupon("SAVE10") {
//!     let request = CheckoutRequest::new("price_pro", "Acme", "rockets")?.with_coupon("SAVE10");
//!     let checkout = client.checkout(&request)?;
//!     // Redirect the customer to checkout.data's payment_url
//! }
//! # Ok::<(), skipper_core::ApiError>(())
//! ```
//!
//! ## Custom Transport
//!
//! `SkipperClient` is generic over [`skipper_core::Transport`]; swap in your
//! own with [`SkipperClient::with_transport`].

pub mod client;
pub mod config;
pub mod http;

// Re-exports
pub use client::SkipperClient;
pub use config::ClientConfig;
pub use http::HttpTransport;
