//! Payment method types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Billing, Metadata, PaymentMethodType};
use crate::envelope::{Resource, ResourceKind};

/// A payment method resource.
pub type PaymentMethod = Resource<PaymentMethodAttributes>;

/// Echoed card details. Number and CVC never come back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDetails {
    /// Card brand.
    #[serde(default)]
    pub brand: Option<String>,
    /// Last four digits.
    #[serde(default)]
    pub last4: Option<String>,
    /// Expiry month.
    #[serde(default)]
    pub exp_month: Option<u8>,
    /// Expiry year.
    #[serde(default)]
    pub exp_year: Option<u16>,
}

/// Payment method attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodAttributes {
    /// Method kind.
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    /// Card details, for card methods.
    #[serde(default)]
    pub details: Option<PaymentMethodDetails>,
    /// Billing details.
    #[serde(default)]
    pub billing: Option<Billing>,
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

impl ResourceKind for PaymentMethodAttributes {
    const TYPE: &'static str = "payment_method";
}

/// Raw card input. Write-only.
///
/// Field names are fixed here rather than derived by the key transform.
#[derive(Clone, Serialize)]
pub struct CardDetails {
    /// Card number.
    #[serde(rename = "card_number")]
    pub number: String,
    /// Expiry month (1-12).
    #[serde(rename = "exp_month")]
    pub expiry_month: u8,
    /// Expiry year (four digits).
    #[serde(rename = "exp_year")]
    pub expiry_year: u16,
    /// Card verification code.
    #[serde(rename = "cvc")]
    pub security_code: String,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last4 = self
            .number
            .get(self.number.len().saturating_sub(4)..)
            .unwrap_or_default();
        f.debug_struct("CardDetails")
            .field("last4", &last4)
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .finish_non_exhaustive()
    }
}

/// Parameters for creating a payment method.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentMethodParams {
    /// Method kind.
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    /// Card input, for card methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CardDetails>,
    /// Billing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,
    /// Metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentMethodParams {
    /// Non-card method of the given kind.
    #[must_use]
    pub fn new(method_type: PaymentMethodType) -> Self {
        Self {
            method_type,
            details: None,
            billing: None,
            metadata: None,
        }
    }

    /// Card method with the given card input.
    #[must_use]
    pub fn card(details: CardDetails) -> Self {
        Self {
            details: Some(details),
            ..Self::new(PaymentMethodType::Card)
        }
    }

    /// Attach billing details.
    #[must_use]
    pub fn with_billing(mut self, billing: Billing) -> Self {
        self.billing = Some(billing);
        self
    }
}

/// Parameters for updating a payment method.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePaymentMethodParams {
    /// Billing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,
    /// Metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}
