//! Customers: `/customers`.

use paymongo_core::{
    CreateCustomerParams, Customer, CustomerAttributes, ListCustomersParams, ListParams,
    ListResult, PaymentMethod, PaymentMethodAttributes, UpdateCustomerParams,
};

use super::ResourceClient;
use crate::error::Result;
use crate::http::HttpClient;

/// Customer operations.
#[derive(Debug, Clone)]
pub struct Customers {
    inner: ResourceClient,
}

impl Customers {
    /// Base path of this resource.
    pub const PATH: &'static str = "/customers";

    /// Bind to a transport.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self {
            inner: ResourceClient::new(http, Self::PATH),
        }
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn create(&self, params: &CreateCustomerParams) -> Result<Customer> {
        self.inner.create(params).await
    }

    /// Retrieve a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn retrieve(&self, id: &str) -> Result<Customer> {
        self.inner.retrieve(id, &[]).await
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn update(&self, id: &str, params: &UpdateCustomerParams) -> Result<Customer> {
        self.inner.update(id, params).await
    }

    /// Delete a customer, returning its last snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn delete(&self, id: &str) -> Result<Customer> {
        self.inner.delete(&[id]).await
    }

    /// List customers, optionally filtered by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn list(
        &self,
        params: &ListCustomersParams,
    ) -> Result<ListResult<CustomerAttributes>> {
        self.inner.list(&[], &params.query_pairs()).await
    }

    /// List the payment methods saved for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn get_payment_methods(
        &self,
        id: &str,
        params: &ListParams,
    ) -> Result<ListResult<PaymentMethodAttributes>> {
        self.inner
            .list(&[id, "payment_methods"], &params.query_pairs())
            .await
    }

    /// Detach a saved payment method, returning its last snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    pub async fn delete_payment_method(
        &self,
        id: &str,
        payment_method_id: &str,
    ) -> Result<PaymentMethod> {
        self.inner
            .delete(&[id, "payment_methods", payment_method_id])
            .await
    }
}
