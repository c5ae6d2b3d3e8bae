//! End-to-end tests of the HTTP surface against an in-process service.

use actix_web::{App, test, web};
use serde_json::{Value, json};

use powchain::api::{self, AppState};

fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState::default())
}

#[actix_web::test]
async fn fresh_node_serves_the_genesis_chain() {
    let state = app_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/chain/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["length"], 1);
    assert_eq!(body["chain"][0]["index"], 1);
    assert_eq!(body["chain"][0]["proof"], 100);
    assert_eq!(body["chain"][0]["previousHash"], "1");
}

#[actix_web::test]
async fn submitted_transaction_lands_in_the_next_forged_block() {
    let state = app_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/transactions/")
        .set_json(json!({"sender": "alice", "recipient": "bob", "amount": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["index"], 2);

    let req = test::TestRequest::get().uri("/api/v1/mine/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["index"], 2);
    // The submitted transaction plus the mining reward.
    let txs = body["transactions"].as_array().unwrap();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0]["sender"], "alice");
    assert_eq!(txs[1]["sender"], "0");
    assert_eq!(txs[1]["recipient"], Value::from(state.node_id.clone()));
    assert_eq!(txs[1]["amount"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/chain/valid/")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["length"], 2);
}

#[actix_web::test]
async fn mining_clears_the_pending_pool() {
    let state = app_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/transactions/")
        .set_json(json!({"sender": "a", "recipient": "b", "amount": -5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get().uri("/api/v1/mine/").to_request();
    let mined: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mined["index"], 2);

    // Pool was consumed; the next transaction targets the block after.
    let req = test::TestRequest::post()
        .uri("/api/v1/transactions/")
        .set_json(json!({"sender": "b", "recipient": "a", "amount": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["index"], 3);
}

#[actix_web::test]
async fn node_registration_deduplicates_addresses() {
    let state = app_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/nodes/register/")
        .set_json(json!({"nodes": [
            "http://192.168.0.5:5000",
            "http://192.168.0.5:5000",
            "http://192.168.0.6:5000"
        ]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "New nodes have been added");
    assert_eq!(body["total_nodes"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn missing_node_list_is_a_bad_request() {
    let state = app_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/nodes/register/")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn resolving_with_no_peers_keeps_the_local_chain() {
    let state = app_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/nodes/resolve/")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["replaced"], false);
    assert_eq!(body["message"], "Our chain is authoritative");
    assert_eq!(body["length"], 1);
}

#[actix_web::test]
async fn health_endpoint_responds() {
    let state = app_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
