//! Customer types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ListParams, QueryPairs};
use crate::envelope::{Resource, ResourceKind};

/// A customer resource.
pub type Customer = Resource<CustomerAttributes>;

/// Preferred channel for customer notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultDevice {
    /// SMS to the customer's phone.
    Phone,
    /// Email to the customer's address.
    Email,
}

/// Customer attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAttributes {
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Notification channel.
    #[serde(default)]
    pub default_device: Option<DefaultDevice>,
    /// Payment method used when none is given.
    #[serde(default)]
    pub default_payment_method_id: Option<String>,
    /// Whether this is a live-mode object.
    #[serde(default)]
    pub livemode: bool,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResourceKind for CustomerAttributes {
    const TYPE: &'static str = "customer";
}

/// Parameters for creating a customer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCustomerParams {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Notification channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_device: Option<DefaultDevice>,
}

/// Parameters for updating a customer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomerParams {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Notification channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_device: Option<DefaultDevice>,
    /// Payment method used when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_payment_method_id: Option<String>,
}

/// Parameters for listing customers.
#[derive(Debug, Clone, Default)]
pub struct ListCustomersParams {
    /// Only customers with this email.
    pub email: Option<String>,
    /// Cursor and page size.
    pub page: ListParams,
}

impl ListCustomersParams {
    /// Query pairs for this listing.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("email", self.email.clone())];
        pairs.extend(self.page.query_pairs());
        pairs
    }
}
