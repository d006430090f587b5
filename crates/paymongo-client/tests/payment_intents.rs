//! Payment intent flows against a stub server.

mod common;

use std::collections::BTreeMap;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{data, payment_intent, TestHarness};
use paymongo_client::{
    AttachPaymentIntentParams, CapturePaymentIntentParams, CaptureType, CardOptions,
    CreatePaymentIntentParams, PaymentIntentStatus, PaymentMethodOptions, PaymentMethodType,
    RetrievePaymentIntentParams, ThreeDSecure,
};

#[tokio::test]
async fn create_sends_wrapped_snake_case_attributes() {
    let harness = TestHarness::new().await;

    let mut metadata = BTreeMap::new();
    metadata.insert("orderId".to_string(), "ord_42".to_string());

    Mock::given(method("POST"))
        .and(path("/payment_intents"))
        .and(body_json(json!({
            "data": {
                "attributes": {
                    "amount": 10000,
                    "currency": "PHP",
                    "payment_method_allowed": ["card", "gcash"],
                    "payment_method_options": {
                        "card": { "request_three_d_secure": "any" }
                    },
                    "capture_type": "manual",
                    "metadata": { "order_id": "ord_42" }
                }
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(data(payment_intent("pi_1", "awaiting_payment_method"))),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let params = CreatePaymentIntentParams {
        payment_method_options: Some(PaymentMethodOptions {
            card: Some(CardOptions {
                request_three_d_secure: Some(ThreeDSecure::Any),
            }),
        }),
        capture_type: Some(CaptureType::Manual),
        metadata: Some(metadata),
        ..CreatePaymentIntentParams::new(
            10000,
            "PHP",
            vec![PaymentMethodType::Card, PaymentMethodType::Gcash],
        )
    };

    let intent = harness.client.payment_intents().create(&params).await.unwrap();
    assert_eq!(intent.id, "pi_1");
    assert_eq!(intent.attributes.status, PaymentIntentStatus::AwaitingPaymentMethod);
    assert_eq!(intent.attributes.client_key, "pi_1_client_key");
}

#[tokio::test]
async fn created_intent_round_trips_through_retrieve() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/payment_intents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(data(payment_intent("pi_rt", "awaiting_payment_method"))),
        )
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payment_intents/pi_rt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(data(payment_intent("pi_rt", "awaiting_payment_method"))),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let intents = harness.client.payment_intents();
    let created = intents
        .create(&CreatePaymentIntentParams::new(10000, "PHP", vec![PaymentMethodType::Card]))
        .await
        .unwrap();
    let fetched = intents
        .retrieve(&created.id, &RetrievePaymentIntentParams::default())
        .await
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.type_name(), created.type_name());
    assert_eq!(fetched.type_name(), "payment_intent");

    let requests = harness.server.received_requests().await.unwrap();
    assert_eq!(requests[1].url.query(), None);
}

#[tokio::test]
async fn attach_posts_payment_method_and_surfaces_redirect() {
    let harness = TestHarness::new().await;

    let mut awaiting = payment_intent("pi_1", "awaiting_next_action");
    awaiting["attributes"]["next_action"] = json!({
        "type": "redirect",
        "redirect": {
            "url": "https://3ds.example/pi_1",
            "return_url": "https://shop.example/return"
        }
    });

    Mock::given(method("POST"))
        .and(path("/payment_intents/pi_1/attach"))
        .and(body_json(json!({
            "data": {
                "attributes": {
                    "payment_method": "pm_1",
                    "client_key": "pi_1_client_key",
                    "return_url": "https://shop.example/return"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(awaiting)))
        .expect(1)
        .mount(&harness.server)
        .await;

    let intent = harness
        .client
        .payment_intents()
        .attach(
            "pi_1",
            &AttachPaymentIntentParams {
                payment_method: "pm_1".into(),
                client_key: Some("pi_1_client_key".into()),
                return_url: Some("https://shop.example/return".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(intent.attributes.status, PaymentIntentStatus::AwaitingNextAction);
    assert_eq!(intent.attributes.redirect_url(), Some("https://3ds.example/pi_1"));
}

#[tokio::test]
async fn capture_and_cancel_hit_action_paths() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/payment_intents/pi_1/capture"))
        .and(body_json(json!({ "data": { "attributes": { "amount": 7500 } } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(payment_intent("pi_1", "succeeded"))))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payment_intents/pi_2/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(payment_intent("pi_2", "cancelled"))))
        .expect(1)
        .mount(&harness.server)
        .await;

    let intents = harness.client.payment_intents();
    let captured = intents
        .capture("pi_1", &CapturePaymentIntentParams { amount: 7500 })
        .await
        .unwrap();
    let cancelled = intents.cancel("pi_2").await.unwrap();

    assert_eq!(captured.attributes.status, PaymentIntentStatus::Succeeded);
    assert_eq!(cancelled.attributes.status, PaymentIntentStatus::Cancelled);
}
