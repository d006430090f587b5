//! Checkout session types.
//!
//! A checkout session is a hosted payment page wrapping its own payment intent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Billing, Metadata, PaymentMethodType};
use crate::envelope::{Resource, ResourceKind};
use crate::payment::Payment;
use crate::payment_intent::PaymentIntent;

/// A checkout session resource.
pub type CheckoutSession = Resource<CheckoutSessionAttributes>;

/// Checkout session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionStatus {
    /// Open for payment.
    Active,
    /// Closed without payment.
    Expired,
    /// Paid.
    Paid,
}

/// One line on the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name.
    pub name: String,
    /// Unit amount in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: String,
    /// Quantity.
    pub quantity: u32,
    /// Item description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl LineItem {
    /// `quantity` of `name` at `amount` each.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            currency: currency.into(),
            quantity,
            description: None,
            images: Vec::new(),
        }
    }

    /// Unit amount times quantity, in minor units; `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<i64> {
        self.amount.checked_mul(i64::from(self.quantity))
    }
}

/// Checkout session attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionAttributes {
    /// Items being paid for.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Method kinds offered on the page.
    #[serde(default)]
    pub payment_method_types: Vec<PaymentMethodType>,
    /// Current status.
    pub status: CheckoutSessionStatus,
    /// Hosted page URL.
    #[serde(default)]
    pub checkout_url: Option<String>,
    /// Redirect after a successful payment.
    #[serde(default)]
    pub success_url: Option<String>,
    /// Redirect after the customer cancels.
    #[serde(default)]
    pub cancel_url: Option<String>,
    /// Client key of the session.
    #[serde(default)]
    pub client_key: Option<String>,
    /// Payment intent behind the page.
    #[serde(default)]
    pub payment_intent: Option<PaymentIntent>,
    /// Payments made through the page.
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Billing details collected or prefilled.
    #[serde(default)]
    pub billing: Option<Billing>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Merchant reference.
    #[serde(default)]
    pub reference_number: Option<String>,
    /// Whether a receipt is emailed.
    #[serde(default)]
    pub send_email_receipt: bool,
    /// Whether the description is shown.
    #[serde(default)]
    pub show_description: bool,
    /// Whether line items are shown.
    #[serde(default)]
    pub show_line_items: bool,
    /// Metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Whether this is a live-mode object.
    #[serde(default)]
    pub livemode: bool,
    /// When the session was paid.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub paid_at: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResourceKind for CheckoutSessionAttributes {
    const TYPE: &'static str = "checkout_session";
}

/// Parameters for creating a checkout session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCheckoutSessionParams {
    /// Items being paid for.
    pub line_items: Vec<LineItem>,
    /// Method kinds offered on the page.
    pub payment_method_types: Vec<PaymentMethodType>,
    /// Redirect after a successful payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Redirect after the customer cancels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    /// Prefilled billing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Merchant reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Whether a receipt is emailed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email_receipt: Option<bool>,
    /// Whether the description is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_description: Option<bool>,
    /// Whether line items are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_line_items: Option<bool>,
    /// Metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}
