//! Common test utilities for the stub-server integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use serde_json::{json, Value};
use wiremock::MockServer;

use paymongo_client::{PayMongo, PayMongoConfig};

/// Secret key used against the stub server.
pub const SECRET_KEY: &str = "sk_test_abc";

/// `Authorization` header the stub expects for [`SECRET_KEY`].
pub const SECRET_AUTH: &str = "Basic c2tfdGVzdF9hYmM6";

/// Stub server plus a client pointed at it.
pub struct TestHarness {
    /// The stub API.
    pub server: MockServer,
    /// Client authenticated with [`SECRET_KEY`].
    pub client: PayMongo,
}

impl TestHarness {
    /// Start a fresh stub server and a secret-key client for it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = PayMongo::new(
            PayMongoConfig::new()
                .with_secret_key(SECRET_KEY)
                .with_base_url(server.uri()),
        )
        .expect("Failed to build client");

        Self { server, client }
    }

    /// Client on a public key against the same server.
    pub fn public_client(&self, key: &str) -> PayMongo {
        PayMongo::new(
            PayMongoConfig::new()
                .with_public_key(key)
                .with_base_url(self.server.uri()),
        )
        .expect("Failed to build public client")
    }
}

/// `{ "data": resource }`
pub fn data(resource: Value) -> Value {
    json!({ "data": resource })
}

/// `{ "data": [...], "has_more": ... }`
pub fn page(resources: Vec<Value>, has_more: bool) -> Value {
    json!({ "data": resources, "has_more": has_more })
}

/// `{ "errors": [{ code, detail }] }`
pub fn api_errors(code: &str, detail: &str) -> Value {
    json!({ "errors": [{ "code": code, "detail": detail }] })
}

pub fn payment_intent(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "type": "payment_intent",
        "attributes": {
            "amount": 10000,
            "currency": "PHP",
            "payment_method_allowed": ["card", "gcash"],
            "status": status,
            "client_key": format!("{id}_client_key"),
            "payments": [],
            "livemode": false,
            "created_at": 1_700_000_000,
            "updated_at": 1_700_000_000
        }
    })
}

pub fn payment_method(id: &str) -> Value {
    json!({
        "id": id,
        "type": "payment_method",
        "attributes": {
            "type": "card",
            "details": { "last4": "4345", "exp_month": 12, "exp_year": 2030 },
            "billing": { "name": "Juan dela Cruz", "email": "juan@example.com" },
            "livemode": false
        }
    })
}

pub fn payment(id: &str) -> Value {
    json!({
        "id": id,
        "type": "payment",
        "attributes": {
            "amount": 10000,
            "fee": 350,
            "net_amount": 9650,
            "currency": "PHP",
            "status": "paid",
            "payment_intent_id": "pi_1",
            "refunds": []
        }
    })
}

pub fn refund(id: &str, payment_id: &str) -> Value {
    json!({
        "id": id,
        "type": "refund",
        "attributes": {
            "amount": 2500,
            "currency": "PHP",
            "payment_id": payment_id,
            "reason": "requested_by_customer",
            "status": "pending"
        }
    })
}

pub fn customer(id: &str) -> Value {
    json!({
        "id": id,
        "type": "customer",
        "attributes": {
            "first_name": "Juan",
            "last_name": "dela Cruz",
            "email": "juan@example.com",
            "phone": "+639171234567",
            "default_device": "phone"
        }
    })
}

pub fn webhook(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "type": "webhook",
        "attributes": {
            "url": "https://shop.example/hooks",
            "events": ["payment.paid", "payment.failed"],
            "status": status,
            "secret_key": "whsk_abc"
        }
    })
}

pub fn checkout_session(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "type": "checkout_session",
        "attributes": {
            "status": status,
            "checkout_url": format!("https://checkout.example/{id}"),
            "success_url": "https://shop.example/success",
            "cancel_url": "https://shop.example/cancel",
            "line_items": [{ "name": "Kape", "amount": 12550, "currency": "PHP", "quantity": 2 }],
            "payment_method_types": ["gcash", "card"],
            "payment_intent": payment_intent("pi_cs", "awaiting_payment_method"),
            "payments": []
        }
    })
}
