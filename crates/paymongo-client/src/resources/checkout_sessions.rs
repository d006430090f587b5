//! Checkout sessions: `/checkout_sessions`.

use paymongo_core::{CheckoutSession, CreateCheckoutSessionParams};

use super::ResourceClient;
use crate::error::Result;
use crate::http::HttpClient;

/// Checkout session operations.
#[derive(Debug, Clone)]
pub struct CheckoutSessions {
    inner: ResourceClient,
}

impl CheckoutSessions {
    /// Base path of this resource.
    pub const PATH: &'static str = "/checkout_sessions";

    /// Bind to a transport.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            inner: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Create a hosted checkout page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create(&self, params: &CreateCheckoutSessionParams) -> Result<CheckoutSession> {
        self.inner.create(params).await
    }

    /// Retrieve a checkout session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn retrieve(&self, id: &str) -> Result<CheckoutSession> {
        self.inner.retrieve(id, &[]).await
    }

    /// Close an active session so it can no longer be paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn expire(&self, id: &str) -> Result<CheckoutSession> {
        self.inner.action(id, "expire", None::<&()>).await
    }
}
