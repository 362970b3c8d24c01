//! # Skipper Service Client
//!
//! One method per API operation. Each builds the endpoint from the configured
//! base URI, attaches headers, sends through the [`Transport`] and decodes the
//! response with [`decode_envelope`].
//!
//! Validity checks (`token_valid`, `valid_coupon`, customer lookup) never
//! fail: any error is reported as "not valid" / "not found". Every other
//! operation returns the error unchanged.

use crate::config::ClientConfig;
use crate::http::HttpTransport;
use skipper_core::{
    decode_envelope, ApiKeyResponse, ApiRequest, ApiResult, Checkout, CheckoutRequest, Coupon,
    CreateApiKeyRequest, Customer, Envelope, JsonRequest, Model, Price, Shape, Transport,
    ValidApiKeyResponse,
};
use tracing::{debug, info, instrument, warn};

const API_KEY_HEADER: &str = "x-api-key";

/// Client for the Skipper billing API
///
/// Holds only immutable configuration and the transport, so one instance can
/// be shared across threads.
pub struct SkipperClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl SkipperClient<HttpTransport> {
    /// Create a client backed by the blocking HTTP transport
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Create from environment variables
    pub fn from_env() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }
}

impl<T: Transport> SkipperClient<T> {
    /// Create a client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authenticated(&self, request: ApiRequest) -> ApiRequest {
        request.header(API_KEY_HEADER, self.config.api_token.as_str())
    }

    fn send<M: Model>(&self, request: ApiRequest, shape: Shape) -> ApiResult<Envelope<M>> {
        let response = self.transport.execute(request)?;
        decode_envelope(&response, shape)
    }

    /// Look up the configured API key (`GET /auth/validate/{token}`)
    #[instrument(skip(self))]
    pub fn validate_api_key(&self) -> ApiResult<Envelope<ValidApiKeyResponse>> {
        let url = self
            .config
            .endpoint(&["auth", "validate", self.config.api_token.as_str()])?;
        self.send(ApiRequest::get(url).with_secret_path(), Shape::Single)
    }

    /// Whether the API accepts the configured key. Errors count as invalid.
    #[instrument(skip(self))]
    pub fn token_valid(&self) -> bool {
        match self.validate_api_key() {
            Ok(envelope) => envelope.success,
            Err(e) => {
                debug!(error = %e, "token validation failed");
                false
            }
        }
    }

    /// Create a new API key (`POST /internal/management/api_key`)
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub fn create_api_key(
        &self,
        request: &CreateApiKeyRequest,
    ) -> ApiResult<Envelope<ApiKeyResponse>> {
        let body = request.to_json()?;
        let url = self
            .config
            .endpoint(&["internal", "management", "api_key"])?;

        let envelope = self.send(ApiRequest::post(url).json(body), Shape::Single)?;
        info!("Created API key");
        Ok(envelope)
    }

    /// List all prices (`GET /api/v1/products`)
    #[instrument(skip(self))]
    pub fn products(&self) -> ApiResult<Envelope<Price>> {
        let url = self.config.endpoint(&["api", "v1", "products"])?;
        self.send(self.authenticated(ApiRequest::get(url)), Shape::List)
    }

    /// Find a price by its `external_id`
    #[instrument(skip(self))]
    pub fn product(&self, external_id: &str) -> ApiResult<Option<Price>> {
        let prices = self.products()?.data.into_list().unwrap_or_default();
        Ok(prices.into_iter().find(|p| p.external_id == external_id))
    }

    /// Look up a coupon by code (`GET /api/v1/products/coupons/{code}`)
    #[instrument(skip(self))]
    pub fn coupon(&self, code: &str) -> ApiResult<Envelope<Coupon>> {
        let url = self
            .config
            .endpoint(&["api", "v1", "products", "coupons", code])?;
        self.send(self.authenticated(ApiRequest::get(url)), Shape::Single)
    }

    /// Whether a coupon code is redeemable. Errors count as invalid.
    #[instrument(skip(self))]
    pub fn valid_coupon(&self, code: &str) -> bool {
        match self.coupon(code) {
            Ok(envelope) => envelope.success,
            Err(e) => {
                debug!(error = %e, "coupon lookup failed");
                false
            }
        }
    }

    /// Find the customer for a company/project pair. Errors count as absent.
    #[instrument(skip(self))]
    pub fn customer_by_company_and_project(&self, company: &str, project: &str) -> Option<Customer> {
        let result = self.config.endpoint(&["api", "v1", "customers"]).and_then(|mut url| {
            url.query_pairs_mut()
                .append_pair("project_name", project.trim())
                .append_pair("company_name", company.trim());
            self.send::<Customer>(self.authenticated(ApiRequest::get(url)), Shape::Single)
        });

        match result {
            Ok(envelope) => envelope.data.into_single(),
            Err(e) => {
                warn!(error = %e, "customer lookup failed");
                None
            }
        }
    }

    /// Start a checkout session (`POST /api/v1/checkout`)
    #[instrument(skip(self, request), fields(price_id = %request.price_id))]
    pub fn checkout(&self, request: &CheckoutRequest) -> ApiResult<Envelope<Checkout>> {
        let body = request.to_json()?;
        let url = self.config.endpoint(&["api", "v1", "checkout"])?;

        let envelope: Envelope<Checkout> = self.send(
            self.authenticated(ApiRequest::post(url).json(body)),
            Shape::Single,
        )?;

        if let Some(checkout) = envelope.data.as_single() {
            info!("Created checkout session: url={}", checkout.payment_url);
        }
        Ok(envelope)
    }
}
