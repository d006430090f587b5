//! Per-resource API clients.
//!
//! Each client binds one base path and unwraps the API's envelopes, so callers
//! get `Resource<...>` and `ListResult<...>` values back.

mod checkout_sessions;
mod customers;
mod payment_intents;
mod payment_methods;
mod payments;
mod refunds;
mod webhooks;

pub use checkout_sessions::CheckoutSessions;
pub use customers::Customers;
pub use payment_intents::PaymentIntents;
pub use payment_methods::PaymentMethods;
pub use payments::Payments;
pub use refunds::Refunds;
pub use webhooks::Webhooks;

use paymongo_core::{
    wrap_attributes, DataEnvelope, ListEnvelope, ListResult, Resource, ResourceKind,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http::HttpClient;

/// Shared plumbing behind every resource client.
#[derive(Debug, Clone)]
pub(crate) struct ResourceClient {
    http: HttpClient,
    base_path: &'static str,
}

impl ResourceClient {
    pub(crate) fn new(http: HttpClient, base_path: &'static str) -> Self {
        Self { http, base_path }
    }

    /// `{base}/{segment}/...`, each segment percent-encoded.
    pub(crate) fn path(&self, segments: &[&str]) -> String {
        let mut path = self.base_path.to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }

    async fn send<A>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, Option<String>)],
    ) -> Result<Resource<A>>
    where
        A: ResourceKind + DeserializeOwned,
    {
        let body = self.http.request(method, path, body, query).await?;
        let envelope: DataEnvelope<Resource<A>> =
            serde_json::from_value(body.unwrap_or(Value::Null))?;
        Ok(envelope.data)
    }

    pub(crate) async fn create<A, P>(&self, params: &P) -> Result<Resource<A>>
    where
        A: ResourceKind + DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = wrap_attributes(params)?;
        self.send(Method::POST, &self.path(&[]), Some(&body), &[])
            .await
    }

    pub(crate) async fn retrieve<A>(
        &self,
        id: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<Resource<A>>
    where
        A: ResourceKind + DeserializeOwned,
    {
        self.send(Method::GET, &self.path(&[id]), None, query)
            .await
    }

    pub(crate) async fn update<A, P>(&self, id: &str, params: &P) -> Result<Resource<A>>
    where
        A: ResourceKind + DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = wrap_attributes(params)?;
        self.send(Method::PUT, &self.path(&[id]), Some(&body), &[])
            .await
    }

    /// Delete and return the last snapshot of the resource.
    pub(crate) async fn delete<A>(&self, segments: &[&str]) -> Result<Resource<A>>
    where
        A: ResourceKind + DeserializeOwned,
    {
        self.send(Method::DELETE, &self.path(segments), None, &[])
            .await
    }

    /// `POST {base}/{id}/{action}`, with attributes when `params` is given.
    pub(crate) async fn action<A, P>(
        &self,
        id: &str,
        action: &str,
        params: Option<&P>,
    ) -> Result<Resource<A>>
    where
        A: ResourceKind + DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = params.map(wrap_attributes).transpose()?;
        self.send(
            Method::POST,
            &self.path(&[id, action]),
            body.as_ref(),
            &[],
        )
        .await
    }

    pub(crate) async fn list<A>(
        &self,
        segments: &[&str],
        query: &[(&str, Option<String>)],
    ) -> Result<ListResult<A>>
    where
        A: ResourceKind + DeserializeOwned,
    {
        let body = self
            .http
            .request(Method::GET, &self.path(segments), None, query)
            .await?;
        let envelope: ListEnvelope<A> = serde_json::from_value(body.unwrap_or(Value::Null))?;
        Ok(envelope.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(base_path: &'static str) -> ResourceClient {
        let http = HttpClient::new("sk_test_abc", "https://api.paymongo.com/v1", None).unwrap();
        ResourceClient::new(http, base_path)
    }

    #[test]
    fn path_joins_segments() {
        let client = resource("/payment_intents");
        assert_eq!(client.path(&[]), "/payment_intents");
        assert_eq!(client.path(&["pi_1"]), "/payment_intents/pi_1");
        assert_eq!(client.path(&["pi_1", "attach"]), "/payment_intents/pi_1/attach");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let client = resource("/customers");
        assert_eq!(
            client.path(&["cus_1/../webhooks", "payment_methods", "pm?x=1"]),
            "/customers/cus_1%2F..%2Fwebhooks/payment_methods/pm%3Fx%3D1"
        );
    }
}
