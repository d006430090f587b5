//! Webhooks: `/webhooks`.
//!
//! Registration only. The signing secret comes back on `create`; verifying
//! deliveries with it happens in the receiving backend.

use paymongo_core::{
    CreateWebhookParams, ListParams, ListResult, UpdateWebhookParams, Webhook, WebhookAttributes,
};

use super::ResourceClient;
use crate::error::Result;
use crate::http::HttpClient;

/// Webhook operations.
#[derive(Debug, Clone)]
pub struct Webhooks {
    inner: ResourceClient,
}

impl Webhooks {
    /// Base path of this resource.
    pub const PATH: &'static str = "/webhooks";

    /// Bind to a transport.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            inner: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Register a webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create(&self, params: &CreateWebhookParams) -> Result<Webhook> {
        self.inner.create(params).await
    }

    /// Retrieve a webhook.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn retrieve(&self, id: &str) -> Result<Webhook> {
        self.inner.retrieve(id, &[]).await
    }

    /// Change a webhook's URL or event set.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn update(&self, id: &str, params: &UpdateWebhookParams) -> Result<Webhook> {
        self.inner.update(id, params).await
    }

    /// List registered webhooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list(&self, params: &ListParams) -> Result<ListResult<WebhookAttributes>> {
        self.inner.list(&[], &params.query_pairs()).await
    }

    /// Resume deliveries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn enable(&self, id: &str) -> Result<Webhook> {
        self.inner.action(id, "enable", None::<&()>).await
    }

    /// Pause deliveries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn disable(&self, id: &str) -> Result<Webhook> {
        self.inner.action(id, "disable", None::<&()>).await
    }
}
