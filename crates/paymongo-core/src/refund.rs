//! Refund types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ListParams, Metadata, QueryPairs};
use crate::envelope::{Resource, ResourceKind};

/// A refund resource.
pub type Refund = Resource<RefundAttributes>;

/// Why a refund was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    /// Duplicate charge.
    Duplicate,
    /// Fraudulent charge.
    Fraudulent,
    /// Customer asked for it.
    RequestedByCustomer,
    /// Anything else.
    Others,
}

/// Refund status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    /// Submitted, not yet settled.
    Pending,
    /// Funds returned.
    Succeeded,
    /// Refund failed.
    Failed,
}

/// Refund attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundAttributes {
    /// Refunded amount in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: String,
    /// Payment being refunded.
    pub payment_id: String,
    /// Reason.
    pub reason: RefundReason,
    /// Current status.
    pub status: RefundStatus,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Whether this is a live-mode object.
    #[serde(default)]
    pub livemode: bool,
    /// When the funds reached the customer.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub refunded_at: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResourceKind for RefundAttributes {
    const TYPE: &'static str = "refund";
}

/// Parameters for creating a refund.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRefundParams {
    /// Amount to refund in minor units.
    pub amount: i64,
    /// Payment to refund.
    pub payment_id: String,
    /// Reason.
    pub reason: RefundReason,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateRefundParams {
    /// Refund `amount` of `payment_id` for `reason`.
    #[must_use]
    pub fn new(amount: i64, payment_id: impl Into<String>, reason: RefundReason) -> Self {
        Self {
            amount,
            payment_id: payment_id.into(),
            reason,
            notes: None,
            metadata: None,
        }
    }
}

/// Parameters for listing refunds.
#[derive(Debug, Clone, Default)]
pub struct ListRefundsParams {
    /// Only refunds of this payment.
    pub payment_id: Option<String>,
    /// Cursor and page size.
    pub page: ListParams,
}

impl ListRefundsParams {
    /// Query pairs for this listing.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("payment_id", self.payment_id.clone())];
        pairs.extend(self.page.query_pairs());
        pairs
    }
}
