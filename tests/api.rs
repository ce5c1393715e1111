//! End-to-end tests of the HTTP surface against a mock JSON-RPC node.

use alloy::consensus::transaction::SignerRecoverable;
use alloy::consensus::{Transaction, TxEnvelope};
use alloy::eips::eip2718::Decodable2718;
use alloy::primitives::{address, keccak256, Address, U256};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;
use common::{start_app, NodeBehavior};

const PAYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const JO: Address = address!("8fD00f170FDf3772C5ebdCD90bF257316c69BA45");

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(router: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_html(router: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(router, request).await;
    (status, String::from_utf8(body).unwrap())
}

#[tokio::test]
async fn test_candidate_listing() {
    let (server, _node) = start_app(NodeBehavior::default()).await;
    let router = server.router();

    let (status, body) = get_json(&router, "/api/v1/candidates").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Lane", "Ash", "Jo", "Kendall", "Skye", "Robin"]);

    let (status, jo) = get_json(&router, "/api/v1/candidates/Jo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(jo["address"].as_str().unwrap().parse::<Address>().unwrap(), JO);
    assert_eq!(jo["hourly_rate"], "0.19");
    assert_eq!(jo["rating"], "4.7");

    let (status, body) = get_json(&router, "/api/v1/candidates/Nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown candidate 'Nobody'");
}

#[tokio::test]
async fn test_quote() {
    let (server, node) = start_app(NodeBehavior::default()).await;
    let router = server.router();
    node.clear();

    let (status, quote) = get_json(&router, "/api/v1/quote?candidate=Lane&hours=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["total_cost"], "1.0");
    assert_eq!(quote["total_cost_wei"], "1000000000000000000");
    assert_eq!(quote["total_usd"], 1500.0);

    let (status, body) = get_json(&router, "/api/v1/quote?candidate=Lane&hours=11").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Hours must be between 1 and 10, got 11");

    // Pricing never touches the node.
    assert!(node.methods().is_empty());
}

#[tokio::test]
async fn test_account_balance() {
    let (server, _node) = start_app(NodeBehavior {
        balance: U256::from(2_500_000_000_000_000_000u64),
        ..Default::default()
    })
    .await;

    let (status, account) = get_json(&server.router(), "/api/v1/account").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        account["address"].as_str().unwrap().parse::<Address>().unwrap(),
        PAYER
    );
    assert_eq!(account["balance_wei"], "2500000000000000000");
    assert_eq!(account["balance_ether"], "2.5");
}

#[tokio::test]
async fn test_pay_submits_signed_transfer() {
    let behavior = NodeBehavior::default();
    let (server, node) = start_app(behavior.clone()).await;
    let router = server.router();
    node.clear();

    let (status, receipt) =
        post_json(&router, "/api/v1/pay", json!({ "candidate": "Jo", "hours": 3 })).await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(
        node.methods(),
        [
            "eth_estimateGas",
            "eth_gasPrice",
            "eth_getTransactionCount",
            "eth_sendRawTransaction"
        ]
    );

    let estimate = &node.estimate_params()[0];
    assert_eq!(
        estimate["from"].as_str().unwrap().parse::<Address>().unwrap(),
        PAYER
    );
    assert_eq!(estimate["to"].as_str().unwrap().parse::<Address>().unwrap(), JO);

    let raw = node.raw_transactions();
    assert_eq!(raw.len(), 1);
    let envelope = TxEnvelope::decode_2718(&mut raw[0].as_slice()).unwrap();
    assert_eq!(envelope.recover_signer().unwrap(), PAYER);
    assert_eq!(envelope.to(), Some(JO));
    assert_eq!(envelope.value(), U256::from(570_000_000_000_000_000u64));
    assert_eq!(envelope.nonce(), behavior.nonce);
    assert_eq!(envelope.gas_limit(), behavior.gas_estimate);
    assert_eq!(envelope.gas_price(), Some(behavior.gas_price));
    assert_eq!(envelope.chain_id(), Some(1337));

    assert_eq!(receipt["tx_hash"], keccak256(&raw[0]).to_string());
    assert_eq!(receipt["value_wei"], "570000000000000000");
    assert_eq!(receipt["candidate"], "Jo");
    assert_eq!(receipt["nonce"], behavior.nonce);
}

#[tokio::test]
async fn test_pay_rejected_by_node() {
    let (server, node) = start_app(NodeBehavior {
        reject_with: Some("insufficient funds for gas * price + value".to_string()),
        ..Default::default()
    })
    .await;

    let (status, body) = post_json(
        &server.router(),
        "/api/v1/pay",
        json!({ "candidate": "Ash", "hours": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("insufficient funds"));
    assert!(node.raw_transactions().is_empty());
}

#[tokio::test]
async fn test_pay_refused_above_gas_cap() {
    let (server, node) = start_app(NodeBehavior {
        gas_price: 250_000_000_000,
        ..Default::default()
    })
    .await;
    node.clear();

    let (status, body) = post_json(
        &server.router(),
        "/api/v1/pay",
        json!({ "candidate": "Lane", "hours": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Gas price 250 gwei exceeds maximum 100 gwei");
    assert!(!node.methods().iter().any(|m| m == "eth_sendRawTransaction"));
}

#[tokio::test]
async fn test_pay_refused_just_above_gas_cap() {
    // 100.9 gwei against a 100 gwei cap.
    let (server, node) = start_app(NodeBehavior {
        gas_price: 100_900_000_000,
        ..Default::default()
    })
    .await;
    node.clear();

    let (status, body) = post_json(
        &server.router(),
        "/api/v1/pay",
        json!({ "candidate": "Lane", "hours": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Gas price 101 gwei exceeds maximum 100 gwei");
    assert!(node.raw_transactions().is_empty());
    assert!(!node.methods().iter().any(|m| m == "eth_sendRawTransaction"));
}

#[tokio::test]
async fn test_pay_at_gas_cap_is_sent() {
    let (server, node) = start_app(NodeBehavior {
        gas_price: 100_000_000_000,
        ..Default::default()
    })
    .await;

    let (status, _) = post_json(
        &server.router(),
        "/api/v1/pay",
        json!({ "candidate": "Lane", "hours": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(node.raw_transactions().len(), 1);
}

#[tokio::test]
async fn test_pay_validates_before_any_rpc() {
    let (server, node) = start_app(NodeBehavior::default()).await;
    let router = server.router();
    node.clear();

    let (status, _) =
        post_json(&router, "/api/v1/pay", json!({ "candidate": "Jo", "hours": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        post_json(&router, "/api/v1/pay", json!({ "candidate": "Zed", "hours": 2 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert!(node.methods().is_empty());
}

#[tokio::test]
async fn test_page_render_builds_no_transaction() {
    let (server, node) = start_app(NodeBehavior::default()).await;
    let router = server.router();
    node.clear();

    let (status, html) = get_html(&router, "/?candidate=Kendall&hours=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Fintech Finder</title>"));
    assert!(html.contains(&PAYER.to_string()));
    assert!(html.contains("100000000000000000000 Wei"));
    assert!(html.contains("<b>Name:</b> Kendall"));
    assert!(html.contains("<b>Rating:</b> 4.7 stars"));
    assert!(html.contains("0.25 Ether"));
    assert!(html.contains("<b>Total:</b> 1.0 Ether"));

    // Out-of-range input still renders a valid selection.
    let (status, html) = get_html(&router, "/?candidate=Nobody&hours=40").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<b>Name:</b> Lane"));
    assert!(html.contains("<b>Total:</b> 2.0 Ether"));

    assert!(node.methods().iter().all(|m| m == "eth_getBalance"));
    assert!(node.raw_transactions().is_empty());
}

#[tokio::test]
async fn test_page_pay_form() {
    let (server, node) = start_app(NodeBehavior::default()).await;

    let request = Request::post("/pay")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("candidate=Lane&hours=5"))
        .unwrap();
    let (status, body) = send(&server.router(), request).await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    let raw = node.raw_transactions();
    assert_eq!(raw.len(), 1);
    assert!(html.contains(&format!(
        "Transaction sent! Transaction hash: {}",
        keccak256(&raw[0])
    )));
}

#[tokio::test]
async fn test_page_pay_form_shows_node_rejection() {
    let (server, node) = start_app(NodeBehavior {
        reject_with: Some("nonce too low: <5>".to_string()),
        ..Default::default()
    })
    .await;

    let request = Request::post("/pay")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("candidate=Jo&hours=2"))
        .unwrap();
    let (status, body) = send(&server.router(), request).await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Payment failed: "));
    assert!(html.contains("nonce too low: &lt;5&gt;"));
    assert!(!html.contains("<5>"));
    assert!(!html.contains("Transaction sent!"));
    // The page still renders the attempted selection.
    assert!(html.contains("<b>Name:</b> Jo"));
    assert!(node.raw_transactions().is_empty());
}

#[tokio::test]
async fn test_page_tolerates_malformed_hours() {
    let (server, _node) = start_app(NodeBehavior::default()).await;
    let router = server.router();

    for uri in ["/?hours=abc", "/?hours=-1", "/?candidate=Ash&hours="] {
        let (status, html) = get_html(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(html.contains("value=\"1\" onchange"), "{uri}");
    }

    let (_, html) = get_html(&router, "/?candidate=Ash&hours=abc").await;
    assert!(html.contains("<b>Name:</b> Ash"));
    assert!(html.contains("<b>Total:</b> 0.33 Ether"));
}

#[tokio::test]
async fn test_request_id_and_health() {
    let (server, _node) = start_app(NodeBehavior::default()).await;
    let router = server.router();

    let response = router
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let response = router
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "fixed-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "fixed-id");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["blockchain_reachable"], true);
}
