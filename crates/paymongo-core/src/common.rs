//! Types shared across resource kinds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form string metadata attached to a resource.
pub type Metadata = BTreeMap<String, String>;

/// Query parameters as `(name, value)` pairs; `None` values are never sent.
pub type QueryPairs = Vec<(&'static str, Option<String>)>;

/// Payment method kinds supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    /// Credit or debit card.
    Card,
    /// Maya e-wallet.
    Paymaya,
    /// `GCash` e-wallet.
    Gcash,
    /// `GrabPay` e-wallet.
    GrabPay,
    /// `BillEase` buy-now-pay-later.
    Billease,
    /// Direct online banking.
    Dob,
    /// Direct online banking through UnionBank.
    DobUbp,
    /// Brankas direct debit, BDO.
    BrankasBdo,
    /// Brankas direct debit, Landbank.
    BrankasLandbank,
    /// Brankas direct debit, Metrobank.
    BrankasMetrobank,
    /// QR Ph.
    Qrph,
}

impl PaymentMethodType {
    /// The wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Paymaya => "paymaya",
            Self::Gcash => "gcash",
            Self::GrabPay => "grab_pay",
            Self::Billease => "billease",
            Self::Dob => "dob",
            Self::DobUbp => "dob_ubp",
            Self::BrankasBdo => "brankas_bdo",
            Self::BrankasLandbank => "brankas_landbank",
            Self::BrankasMetrobank => "brankas_metrobank",
            Self::Qrph => "qrph",
        }
    }
}

impl std::fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street address, first line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Street address, second line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City or municipality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Two-letter ISO country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Billing details attached to a payment method, payment or checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billing {
    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Cursor pagination parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Return items listed before this ID.
    pub before: Option<String>,
    /// Return items listed after this ID.
    pub after: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ListParams {
    /// Page after the given cursor.
    #[must_use]
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            after: Some(cursor.into()),
            ..Self::default()
        }
    }

    /// Set the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query pairs for this cursor.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        vec![
            ("before", self.before.clone()),
            ("after", self.after.clone()),
            ("limit", self.limit.map(|l| l.to_string())),
        ]
    }
}
