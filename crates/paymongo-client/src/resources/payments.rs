//! Payments: `/payments`. Read-only.

use paymongo_core::{ListPaymentsParams, ListResult, Payment, PaymentAttributes};

use super::ResourceClient;
use crate::error::Result;
use crate::http::HttpClient;

/// Payment operations.
#[derive(Debug, Clone)]
pub struct Payments {
    inner: ResourceClient,
}

impl Payments {
    /// Base path of this resource.
    pub const PATH: &'static str = "/payments";

    /// Bind to a transport.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            inner: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Retrieve a payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn retrieve(&self, id: &str) -> Result<Payment> {
        self.inner.retrieve(id, &[]).await
    }

    /// List payments, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list(&self, params: &ListPaymentsParams) -> Result<ListResult<PaymentAttributes>> {
        self.inner.list(&[], &params.query_pairs()).await
    }
}
