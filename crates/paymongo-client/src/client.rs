//! The `PayMongo` entry point.

use crate::config::{KeyMode, PayMongoConfig};
use crate::error::Result;
use crate::http::HttpClient;
use crate::resources::{
    CheckoutSessions, Customers, PaymentIntents, PaymentMethods, Payments, Refunds, Webhooks,
};

/// PayMongo API client.
///
/// Owns one transport and hands out the seven resource clients. Build it once
/// and pass it (or clones of it) to the code that needs it.
#[derive(Debug, Clone)]
pub struct PayMongo {
    mode: KeyMode,
    http: HttpClient,
    payment_intents: PaymentIntents,
    payment_methods: PaymentMethods,
    payments: Payments,
    customers: Customers,
    refunds: Refunds,
    webhooks: Webhooks,
    checkout_sessions: CheckoutSessions,
}

impl PayMongo {
    /// Create a client from a configuration.
    ///
    /// The secret key is used when both keys are set.
    ///
    /// # Errors
    ///
    /// Returns [`PayMongoError::Config`](crate::PayMongoError::Config) when no
    /// key is set, the key has the wrong prefix, or the base URL is invalid.
    pub fn new(config: PayMongoConfig) -> Result<Self> {
        let (mode, key) = config.resolve_key()?;
        let http = HttpClient::new(key, config.normalized_base_url(), config.timeout)?;

        tracing::debug!(mode = %mode, base_url = %http.base_url(), "PayMongo client ready");

        Ok(Self {
            mode,
            payment_intents: PaymentIntents::new(http.clone()),
            payment_methods: PaymentMethods::new(http.clone()),
            payments: Payments::new(http.clone()),
            customers: Customers::new(http.clone()),
            refunds: Refunds::new(http.clone()),
            webhooks: Webhooks::new(http.clone()),
            checkout_sessions: CheckoutSessions::new(http.clone()),
            http,
        })
    }

    /// Create a server-side client from a secret key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is empty or not `sk_...`.
    pub fn with_secret_key(key: impl Into<String>) -> Result<Self> {
        Self::new(PayMongoConfig::new().with_secret_key(key))
    }

    /// Create a client-side client from a public key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is empty or not `pk_...`.
    pub fn with_public_key(key: impl Into<String>) -> Result<Self> {
        Self::new(PayMongoConfig::new().with_public_key(key))
    }

    /// Which credential this client authenticates with.
    #[must_use]
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Whether the client runs on a public key.
    ///
    /// Informational only; the API decides what each key may do.
    #[must_use]
    pub fn is_client_side(&self) -> bool {
        self.mode == KeyMode::Public
    }

    /// Whether the client runs on a secret key.
    #[must_use]
    pub fn is_server_side(&self) -> bool {
        self.mode == KeyMode::Secret
    }

    /// The shared transport.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Payment intents.
    #[must_use]
    pub fn payment_intents(&self) -> &PaymentIntents {
        &self.payment_intents
    }

    /// Payment methods.
    #[must_use]
    pub fn payment_methods(&self) -> &PaymentMethods {
        &self.payment_methods
    }

    /// Payments.
    #[must_use]
    pub fn payments(&self) -> &Payments {
        &self.payments
    }

    /// Customers.
    #[must_use]
    pub fn customers(&self) -> &Customers {
        &self.customers
    }

    /// Refunds.
    #[must_use]
    pub fn refunds(&self) -> &Refunds {
        &self.refunds
    }

    /// Webhooks.
    #[must_use]
    pub fn webhooks(&self) -> &Webhooks {
        &self.webhooks
    }

    /// Checkout sessions.
    #[must_use]
    pub fn checkout_sessions(&self) -> &CheckoutSessions {
        &self.checkout_sessions
    }
}
