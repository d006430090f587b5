//! Payment intents: `/payment_intents`.

use paymongo_core::{
    AttachPaymentIntentParams, CapturePaymentIntentParams, CreatePaymentIntentParams,
    PaymentIntent, RetrievePaymentIntentParams,
};

use super::ResourceClient;
use crate::error::Result;
use crate::http::HttpClient;

/// Payment intent operations.
#[derive(Debug, Clone)]
pub struct PaymentIntents {
    inner: ResourceClient,
}

impl PaymentIntents {
    /// Base path of this resource.
    pub const PATH: &'static str = "/payment_intents";

    /// Bind to a transport.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            inner: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Create a payment intent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create(&self, params: &CreatePaymentIntentParams) -> Result<PaymentIntent> {
        self.inner.create(params).await
    }

    /// Retrieve a payment intent.
    ///
    /// With a public key, pass the intent's client key in `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn retrieve(
        &self,
        id: &str,
        params: &RetrievePaymentIntentParams,
    ) -> Result<PaymentIntent> {
        self.inner.retrieve(id, &params.query_pairs()).await
    }

    /// Attach a payment method, moving the intent towards payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn attach(
        &self,
        id: &str,
        params: &AttachPaymentIntentParams,
    ) -> Result<PaymentIntent> {
        self.inner.action(id, "attach", Some(params)).await
    }

    /// Capture an intent that is awaiting capture.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn capture(
        &self,
        id: &str,
        params: &CapturePaymentIntentParams,
    ) -> Result<PaymentIntent> {
        self.inner.action(id, "capture", Some(params)).await
    }

    /// Cancel an intent that has not completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn cancel(&self, id: &str) -> Result<PaymentIntent> {
        self.inner.action(id, "cancel", None::<&()>).await
    }
}
