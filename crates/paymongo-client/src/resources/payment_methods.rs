//! Payment methods: `/payment_methods`.

use paymongo_core::{CreatePaymentMethodParams, PaymentMethod, UpdatePaymentMethodParams};

use super::ResourceClient;
use crate::error::Result;
use crate::http::HttpClient;

/// Payment method operations.
#[derive(Debug, Clone)]
pub struct PaymentMethods {
    inner: ResourceClient,
}

impl PaymentMethods {
    /// Base path of this resource.
    pub const PATH: &'static str = "/payment_methods";

    /// Bind to a transport.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            inner: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Create a payment method. Works with a public key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create(&self, params: &CreatePaymentMethodParams) -> Result<PaymentMethod> {
        self.inner.create(params).await
    }

    /// Retrieve a payment method.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn retrieve(&self, id: &str) -> Result<PaymentMethod> {
        self.inner.retrieve(id, &[]).await
    }

    /// Update billing details or metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdatePaymentMethodParams,
    ) -> Result<PaymentMethod> {
        self.inner.update(id, params).await
    }
}
