//! Refunds: `/refunds`.

use paymongo_core::{CreateRefundParams, ListRefundsParams, ListResult, Refund, RefundAttributes};

use super::ResourceClient;
use crate::error::Result;
use crate::http::HttpClient;

/// Refund operations.
#[derive(Debug, Clone)]
pub struct Refunds {
    inner: ResourceClient,
}

impl Refunds {
    /// Base path of this resource.
    pub const PATH: &'static str = "/refunds";

    /// Bind to a transport.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            inner: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Refund all or part of a payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create(&self, params: &CreateRefundParams) -> Result<Refund> {
        self.inner.create(params).await
    }

    /// Retrieve a refund.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn retrieve(&self, id: &str) -> Result<Refund> {
        self.inner.retrieve(id, &[]).await
    }

    /// List refunds, optionally for one payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list(&self, params: &ListRefundsParams) -> Result<ListResult<RefundAttributes>> {
        self.inner.list(&[], &params.query_pairs()).await
    }
}
