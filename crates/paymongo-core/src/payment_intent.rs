//! Payment intent types.
//!
//! A payment intent tracks one attempt to collect an amount. Status moves
//! server-side only; the client reads snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Metadata, PaymentMethodType, QueryPairs};
use crate::envelope::{Resource, ResourceKind};
use crate::payment::Payment;

/// A payment intent resource.
pub type PaymentIntent = Resource<PaymentIntentAttributes>;

/// Payment intent status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    /// No payment method attached yet.
    AwaitingPaymentMethod,
    /// The customer must complete an action (e.g. 3DS redirect).
    AwaitingNextAction,
    /// Payment is being processed.
    Processing,
    /// Payment collected.
    Succeeded,
    /// Authorized, waiting for a manual capture.
    AwaitingCapture,
    /// Cancelled before completion.
    Cancelled,
}

/// When funds are captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureType {
    /// Capture as soon as the payment is authorized.
    Automatic,
    /// Authorize only; capture later via the capture action.
    Manual,
}

/// 3-D Secure policy for card payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreeDSecure {
    /// Request 3DS whenever the card supports it.
    Any,
    /// Let the processor decide.
    Automatic,
}

/// Card-specific payment options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOptions {
    /// 3-D Secure policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_three_d_secure: Option<ThreeDSecure>,
}

/// Per-method payment options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodOptions {
    /// Card options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardOptions>,
}

/// Redirect the customer must follow to complete a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// Where to send the customer.
    pub url: String,
    /// Where the customer lands afterwards.
    #[serde(default)]
    pub return_url: Option<String>,
}

/// Action required from the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAction {
    /// Action kind (currently always `redirect`).
    #[serde(rename = "type")]
    pub action_type: String,
    /// Redirect details.
    #[serde(default)]
    pub redirect: Option<Redirect>,
}

/// Payment intent attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentAttributes {
    /// Amount in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: String,
    /// Payment method kinds this intent accepts.
    #[serde(default)]
    pub payment_method_allowed: Vec<PaymentMethodType>,
    /// Current status.
    pub status: PaymentIntentStatus,
    /// Key that authorizes client-side retrieval and attach.
    pub client_key: String,
    /// Pending customer action, if any.
    #[serde(default)]
    pub next_action: Option<NextAction>,
    /// Payments made against this intent.
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Text shown on the customer's statement.
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    /// Capture mode.
    #[serde(default)]
    pub capture_type: Option<CaptureType>,
    /// Per-method options.
    #[serde(default)]
    pub payment_method_options: Option<PaymentMethodOptions>,
    /// Last failure reported by the processor.
    #[serde(default)]
    pub last_payment_error: Option<serde_json::Value>,
    /// Metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
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

impl ResourceKind for PaymentIntentAttributes {
    const TYPE: &'static str = "payment_intent";
}

impl PaymentIntentAttributes {
    /// Redirect URL the customer must visit, if the intent awaits one.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        self.next_action
            .as_ref()
            .and_then(|a| a.redirect.as_ref())
            .map(|r| r.url.as_str())
    }
}

/// Parameters for creating a payment intent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePaymentIntentParams {
    /// Amount in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: String,
    /// Payment method kinds to accept.
    pub payment_method_allowed: Vec<PaymentMethodType>,
    /// Per-method options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_options: Option<PaymentMethodOptions>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Text shown on the customer's statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Capture mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_type: Option<CaptureType>,
    /// Metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentIntentParams {
    /// Intent for `amount` in `currency`, accepting the given method kinds.
    #[must_use]
    pub fn new(
        amount: i64,
        currency: impl Into<String>,
        payment_method_allowed: Vec<PaymentMethodType>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            payment_method_allowed,
            ..Self::default()
        }
    }
}

/// Parameters for attaching a payment method to an intent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttachPaymentIntentParams {
    /// Payment method ID.
    pub payment_method: String,
    /// Intent client key; required when attaching with a public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,
    /// Where to send the customer after a redirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// Parameters for capturing an authorized intent.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CapturePaymentIntentParams {
    /// Amount to capture, at most the authorized amount.
    pub amount: i64,
}

/// Query for retrieving an intent.
#[derive(Debug, Clone, Default)]
pub struct RetrievePaymentIntentParams {
    /// Intent client key; required when retrieving with a public key.
    pub client_key: Option<String>,
}

impl RetrievePaymentIntentParams {
    /// Query pairs for this retrieval.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        vec![("client_key", self.client_key.clone())]
    }
}
