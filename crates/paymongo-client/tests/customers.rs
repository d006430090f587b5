//! Customer flows and cursor pagination against a stub server.

mod common;

use std::collections::HashSet;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use common::{customer, data, page, payment_method, TestHarness};
use paymongo_client::{
    CreateCustomerParams, DefaultDevice, ListCustomersParams, ListParams, UpdateCustomerParams,
};

#[tokio::test]
async fn create_update_delete() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({
            "data": {
                "attributes": {
                    "first_name": "Juan",
                    "last_name": "dela Cruz",
                    "email": "juan@example.com",
                    "default_device": "email"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(customer("cus_1"))))
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut updated = customer("cus_1");
    updated["attributes"]["phone"] = json!("+639998887777");
    Mock::given(method("PUT"))
        .and(path("/customers/cus_1"))
        .and(body_json(json!({ "data": { "attributes": { "phone": "+639998887777" } } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(updated.clone())))
        .expect(1)
        .mount(&harness.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/customers/cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(updated)))
        .expect(1)
        .mount(&harness.server)
        .await;

    let customers = harness.client.customers();
    let created = customers
        .create(&CreateCustomerParams {
            first_name: "Juan".into(),
            last_name: "dela Cruz".into(),
            email: Some("juan@example.com".into()),
            phone: None,
            default_device: Some(DefaultDevice::Email),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "cus_1");

    let changed = customers
        .update(
            "cus_1",
            &UpdateCustomerParams {
                phone: Some("+639998887777".into()),
                ..UpdateCustomerParams::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(changed.attributes.phone.as_deref(), Some("+639998887777"));

    let deleted = customers.delete("cus_1").await.unwrap();
    assert_eq!(deleted.id, "cus_1");
    assert_eq!(deleted.attributes.phone.as_deref(), Some("+639998887777"));
}

#[tokio::test]
async fn pagination_yields_disjoint_pages() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param_is_missing("after"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![customer("cus_4"), customer("cus_3")], true)),
        )
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("after", "cus_3"))
        .and(query_param("limit", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![customer("cus_2"), customer("cus_1")], false)),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let customers = harness.client.customers();
    let first = customers
        .list(&ListCustomersParams {
            email: None,
            page: ListParams::default().with_limit(2),
        })
        .await
        .unwrap();
    assert!(first.has_more);

    let cursor = first.next_cursor().unwrap().to_string();
    let second = customers
        .list(&ListCustomersParams {
            email: None,
            page: ListParams::after(cursor).with_limit(2),
        })
        .await
        .unwrap();
    assert!(!second.has_more);
    assert_eq!(second.next_cursor(), None);

    let first_ids: HashSet<_> = first.items.iter().map(|c| c.id.clone()).collect();
    assert!(second.items.iter().all(|c| !first_ids.contains(&c.id)));
    // Server order is preserved.
    assert_eq!(first.items[0].id, "cus_4");
    assert_eq!(second.items[1].id, "cus_1");
}

#[tokio::test]
async fn list_filters_by_email() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("email", "juan@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![customer("cus_1")], false)))
        .expect(1)
        .mount(&harness.server)
        .await;

    let list = harness
        .client
        .customers()
        .list(&ListCustomersParams {
            email: Some("juan@example.com".into()),
            page: ListParams::default(),
        })
        .await
        .unwrap();
    assert_eq!(list.items.len(), 1);
}

#[tokio::test]
async fn saved_payment_methods() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/customers/cus_1/payment_methods"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![payment_method("pm_1"), payment_method("pm_2")], false)),
        )
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/customers/cus_1/payment_methods/pm_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(payment_method("pm_2"))))
        .expect(1)
        .mount(&harness.server)
        .await;

    let customers = harness.client.customers();
    let methods = customers
        .get_payment_methods("cus_1", &ListParams::default())
        .await
        .unwrap();
    assert_eq!(methods.items.len(), 2);
    assert_eq!(methods.items[0].type_name(), "payment_method");

    let removed = customers.delete_payment_method("cus_1", "pm_2").await.unwrap();
    assert_eq!(removed.id, "pm_2");
}

#[tokio::test]
async fn ids_are_percent_encoded_in_paths() {
    let harness = TestHarness::new().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(payment_method("pm_1"))))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness
        .client
        .customers()
        .delete_payment_method("cus_1", "../pm_1?force=1")
        .await
        .unwrap();

    let requests = harness.server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.path(),
        "/customers/cus_1/payment_methods/..%2Fpm_1%3Fforce%3D1"
    );
    assert_eq!(requests[0].url.query(), None);
}
