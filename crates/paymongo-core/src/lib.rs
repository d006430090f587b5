//! Core types for the PayMongo client.
//!
//! This crate holds everything about the API's data shapes and nothing about HTTP:
//!
//! - **Envelopes**: `Resource`, `DataEnvelope`, `ListEnvelope`, `ListResult`
//! - **Resources**: payment intents, payment methods, payments, refunds,
//!   customers, webhooks and checkout sessions (attributes and parameters)
//! - **Request shaping**: `to_snake_case_keys`, `wrap_attributes`
//!
//! # Amounts
//!
//! Every amount is an `i64` in the currency's minor unit.
//!
//! - PHP 100.00 is sent as `10000`
//! - Fees and net amounts on a payment use the same unit
//! - No floating point is used for money anywhere in this workspace

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod body;
pub mod checkout_session;
pub mod common;
pub mod customer;
pub mod envelope;
pub mod payment;
pub mod payment_intent;
pub mod payment_method;
pub mod refund;
pub mod webhook;

pub use body::{to_snake_case, to_snake_case_keys, wrap_attributes};
pub use checkout_session::{
    CheckoutSession, CheckoutSessionAttributes, CheckoutSessionStatus,
    CreateCheckoutSessionParams, LineItem,
};
pub use common::{Address, Billing, ListParams, Metadata, PaymentMethodType, QueryPairs};
pub use customer::{
    CreateCustomerParams, Customer, CustomerAttributes, DefaultDevice, ListCustomersParams,
    UpdateCustomerParams,
};
pub use envelope::{DataEnvelope, Kind, ListEnvelope, ListResult, Resource, ResourceKind};
pub use payment::{ListPaymentsParams, Payment, PaymentAttributes, PaymentSource, PaymentStatus};
pub use payment_intent::{
    AttachPaymentIntentParams, CapturePaymentIntentParams, CaptureType, CardOptions,
    CreatePaymentIntentParams, NextAction, PaymentIntent, PaymentIntentAttributes,
    PaymentIntentStatus, PaymentMethodOptions, Redirect, RetrievePaymentIntentParams,
    ThreeDSecure,
};
pub use payment_method::{
    CardDetails, CreatePaymentMethodParams, PaymentMethod, PaymentMethodAttributes,
    PaymentMethodDetails, UpdatePaymentMethodParams,
};
pub use refund::{
    CreateRefundParams, ListRefundsParams, Refund, RefundAttributes, RefundReason, RefundStatus,
};
pub use webhook::{
    CreateWebhookParams, UpdateWebhookParams, Webhook, WebhookAttributes, WebhookEvent,
    WebhookStatus,
};
