//! PayMongo client SDK.
//!
//! Typed async access to the PayMongo payments API: payment intents, payment
//! methods, payments, customers, refunds, webhooks and checkout sessions.
//!
//! # Example
//!
//! ```no_run
//! use paymongo_client::{CreatePaymentIntentParams, PayMongo, PaymentMethodType};
//!
//! # async fn example() -> Result<(), paymongo_client::PayMongoError> {
//! let client = PayMongo::with_secret_key("sk_test_xxx")?;
//!
//! let intent = client
//!     .payment_intents()
//!     .create(&CreatePaymentIntentParams::new(
//!         10_000,
//!         "PHP",
//!         vec![PaymentMethodType::Card, PaymentMethodType::Gcash],
//!     ))
//!     .await?;
//!
//! println!("{} is {:?}", intent.id, intent.attributes.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`PayMongoError`]: `Config` for bad credentials at
//! construction, `Network` when the request never completed, `Api` for
//! non-success responses. Nothing is retried.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
pub mod global;
mod http;
pub mod resources;

pub use client::PayMongo;
pub use config::{
    KeyMode, PayMongoConfig, DEFAULT_BASE_URL, PUBLIC_KEY_PREFIX, SECRET_KEY_PREFIX,
};
pub use error::{ApiError, ErrorDetail, ErrorSource, PayMongoError, Result};
pub use http::{authorization_header, HttpClient};
pub use resources::{
    CheckoutSessions, Customers, PaymentIntents, PaymentMethods, Payments, Refunds, Webhooks,
};

pub use paymongo_core::*;
