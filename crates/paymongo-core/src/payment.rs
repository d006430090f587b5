//! Payment types.
//!
//! Payments are created server-side when an intent succeeds or fails. The
//! client can only read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Billing, ListParams, Metadata, QueryPairs};
use crate::envelope::{Resource, ResourceKind};
use crate::refund::Refund;

/// A payment resource.
pub type Payment = Resource<PaymentAttributes>;

/// Payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting settlement.
    Pending,
    /// Collected.
    Paid,
    /// Declined or errored.
    Failed,
    /// Never completed in time.
    Expired,
}

/// Where the funds came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSource {
    /// Source ID.
    pub id: String,
    /// Source kind (e.g. `card`, `gcash`).
    #[serde(rename = "type")]
    pub source_type: String,
    /// Card brand, for card sources.
    #[serde(default)]
    pub brand: Option<String>,
    /// Last four digits, for card sources.
    #[serde(default)]
    pub last4: Option<String>,
}

/// Payment attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAttributes {
    /// Gross amount in minor units.
    pub amount: i64,
    /// Processing fee in minor units.
    #[serde(default)]
    pub fee: i64,
    /// Amount after fees in minor units.
    #[serde(default)]
    pub net_amount: i64,
    /// Three-letter currency code.
    pub currency: String,
    /// Current status.
    pub status: PaymentStatus,
    /// Refunds issued against this payment.
    #[serde(default)]
    pub refunds: Vec<Refund>,
    /// Funding source.
    #[serde(default)]
    pub source: Option<PaymentSource>,
    /// Billing details.
    #[serde(default)]
    pub billing: Option<Billing>,
    /// Intent this payment belongs to.
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Text shown on the customer's statement.
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    /// Processor reference.
    #[serde(default)]
    pub external_reference_number: Option<String>,
    /// Metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Whether this is a live-mode object.
    #[serde(default)]
    pub livemode: bool,
    /// When the payment was collected.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub paid_at: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ResourceKind for PaymentAttributes {
    const TYPE: &'static str = "payment";
}

impl PaymentAttributes {
    /// Sum of all refunds issued so far, in minor units.
    #[must_use]
    pub fn refunded_amount(&self) -> i64 {
        self.refunds.iter().map(|r| r.attributes.amount).sum()
    }
}

/// Parameters for listing payments.
#[derive(Debug, Clone, Default)]
pub struct ListPaymentsParams {
    /// Cursor and page size.
    pub page: ListParams,
}

impl ListPaymentsParams {
    /// Query pairs for this listing.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        self.page.query_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_with_embedded_refunds() {
        let payment: Payment = serde_json::from_value(json!({
            "id": "pay_1",
            "type": "payment",
            "attributes": {
                "amount": 10000,
                "fee": 350,
                "net_amount": 9650,
                "currency": "PHP",
                "status": "paid",
                "refunds": [
                    {
                        "id": "ref_1",
                        "type": "refund",
                        "attributes": {
                            "amount": 2500,
                            "currency": "PHP",
                            "payment_id": "pay_1",
                            "reason": "requested_by_customer",
                            "status": "succeeded"
                        }
                    }
                ],
                "source": { "id": "card_1", "type": "card", "brand": "visa", "last4": "4345" },
                "paid_at": 1_700_000_000
            }
        }))
        .unwrap();

        let attrs = payment.attributes;
        assert_eq!(attrs.status, PaymentStatus::Paid);
        assert_eq!(attrs.amount - attrs.fee, attrs.net_amount);
        assert_eq!(attrs.refunded_amount(), 2500);
    }
}
