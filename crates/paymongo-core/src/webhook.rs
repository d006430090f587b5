//! Webhook registration types.
//!
//! These configure which events the API delivers and where. Receiving and
//! verifying deliveries is up to the integrator's backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::{Resource, ResourceKind};

/// A webhook resource.
pub type Webhook = Resource<WebhookAttributes>;

/// Event types a webhook can subscribe to.
///
/// Names the API adds later land in [`WebhookEvent::Other`] instead of
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    /// A source became chargeable.
    #[serde(rename = "source.chargeable")]
    SourceChargeable,
    /// A payment was collected.
    #[serde(rename = "payment.paid")]
    PaymentPaid,
    /// A payment failed.
    #[serde(rename = "payment.failed")]
    PaymentFailed,
    /// A payment was refunded.
    #[serde(rename = "payment.refunded")]
    PaymentRefunded,
    /// A refund changed status.
    #[serde(rename = "payment.refund.updated")]
    PaymentRefundUpdated,
    /// A checkout session was paid.
    #[serde(rename = "checkout_session.payment.paid")]
    CheckoutSessionPaymentPaid,
    /// A QR Ph code expired.
    #[serde(rename = "qrph.expired")]
    QrphExpired,
    /// Any other event name, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl WebhookEvent {
    /// Wire name of the event.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SourceChargeable => "source.chargeable",
            Self::PaymentPaid => "payment.paid",
            Self::PaymentFailed => "payment.failed",
            Self::PaymentRefunded => "payment.refunded",
            Self::PaymentRefundUpdated => "payment.refund.updated",
            Self::CheckoutSessionPaymentPaid => "checkout_session.payment.paid",
            Self::QrphExpired => "qrph.expired",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the API delivers to a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookStatus {
    /// Deliveries active.
    Enabled,
    /// Deliveries paused.
    Disabled,
}

/// Webhook attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAttributes {
    /// Delivery URL.
    pub url: String,
    /// Subscribed events.
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
    /// Delivery status.
    pub status: WebhookStatus,
    /// Signing secret; returned when the webhook is created.
    #[serde(default)]
    pub secret_key: Option<String>,
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

impl ResourceKind for WebhookAttributes {
    const TYPE: &'static str = "webhook";
}

impl WebhookAttributes {
    /// Whether the API currently delivers to this webhook.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.status == WebhookStatus::Enabled
    }
}

/// Parameters for registering a webhook.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhookParams {
    /// Delivery URL.
    pub url: String,
    /// Events to subscribe to.
    pub events: Vec<WebhookEvent>,
}

impl CreateWebhookParams {
    /// Deliver `events` to `url`.
    #[must_use]
    pub fn new(url: impl Into<String>, events: Vec<WebhookEvent>) -> Self {
        Self {
            url: url.into(),
            events,
        }
    }
}

/// Parameters for updating a webhook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWebhookParams {
    /// New delivery URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// New event set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<WebhookEvent>>,
}
