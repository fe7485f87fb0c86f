use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use poloniex_api_client::auth::{StaticCredentials, sign};
use poloniex_api_client::clock::FixedClock;
use poloniex_api_client::error::PoloniexError;
use poloniex_api_client::rest::{
    MoveOrderRequest, OrderRequest, PoloniexClient, TransferBalanceRequest, WithdrawRequest,
};
use poloniex_api_client::types::{Account, OrderType, TimeRange};

const SECRET: &str = "test_secret";
const NOW: i64 = 1_700_000_000;

fn build_client(server: &MockServer) -> PoloniexClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", SECRET));
    PoloniexClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .clock(Arc::new(FixedClock::from_unix_timestamp(NOW)))
        .build()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn body_params(request: &Request) -> BTreeMap<String, String> {
    serde_urlencoded::from_bytes(&request.body).unwrap()
}

async fn mount_ok(server: &MockServer, response: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/tradingApi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_return_balances_signed() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "BTC": "0.59098578", "ETH": "0.00000000" });

    Mock::given(method("POST"))
        .and(path("/tradingApi"))
        .and(header("Key", "test_key"))
        .and(header_exists("Sign"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("command=returnBalances"))
        .and(body_string_contains("nonce="))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balances = client.return_balances().await.unwrap();
    assert_eq!(balances, response);

    // The exchange recomputes the HMAC over the exact body it received.
    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let signature = request.headers.get("Sign").unwrap().to_str().unwrap();
    assert_eq!(signature, sign(&request.body, SECRET.as_bytes()).unwrap());
    assert_eq!(signature.len(), 128);
}

#[tokio::test]
async fn test_nonces_increase_across_requests() {
    let server = MockServer::start().await;
    mount_ok(&server, serde_json::json!({})).await;

    let client = build_client(&server);
    let clone = client.clone();
    for _ in 0..3 {
        client.return_fee_info().await.unwrap();
        clone.return_open_orders("all").await.unwrap();
    }

    let nonces: Vec<u64> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| body_params(request)["nonce"].parse().unwrap())
        .collect();
    assert_eq!(nonces.len(), 6);
    assert!(nonces.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_concurrent_requests_get_distinct_nonces() {
    let server = MockServer::start().await;
    mount_ok(&server, serde_json::json!({})).await;

    let client = build_client(&server);
    let calls = (0..8).map(|_| {
        let client = client.clone();
        tokio::spawn(async move { client.return_active_loans().await })
    });
    for handle in calls.collect::<Vec<_>>() {
        handle.await.unwrap().unwrap();
    }

    let mut nonces: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| body_params(request)["nonce"].clone())
        .collect();
    nonces.sort();
    nonces.dedup();
    assert_eq!(nonces.len(), 8);
}

#[tokio::test]
async fn test_withdraw_without_payment_id() {
    let server = MockServer::start().await;
    mount_ok(
        &server,
        serde_json::json!({ "response": "Withdrew 1.5 BTC." }),
    )
    .await;

    let client = build_client(&server);
    client
        .withdraw(&WithdrawRequest::new("btc", dec("1.5"), "addr123"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let params = body_params(&requests[0]);
    assert_eq!(params["command"], "withdraw");
    assert_eq!(params["currency"], "BTC");
    assert_eq!(params["amount"], "1.5");
    assert_eq!(params["address"], "addr123");
    assert!(params.contains_key("nonce"));
    assert!(!params.contains_key("paymentId"));
}

#[tokio::test]
async fn test_buy_with_post_only() {
    let server = MockServer::start().await;
    mount_ok(
        &server,
        serde_json::json!({ "orderNumber": "31226040", "resultingTrades": [] }),
    )
    .await;

    let client = build_client(&server);
    let result = client
        .buy(
            &OrderRequest::new("btc_eth", dec("0.0251"), dec("10"))
                .order_type(OrderType::PostOnly),
        )
        .await
        .unwrap();
    assert_eq!(result["orderNumber"], "31226040");

    let requests = server.received_requests().await.unwrap();
    let params = body_params(&requests[0]);
    assert_eq!(params["command"], "buy");
    assert_eq!(params["currencyPair"], "BTC_ETH");
    assert_eq!(params["rate"], "0.0251");
    assert_eq!(params["amount"], "10");
    assert_eq!(params["postOnly"], "1");
}

#[tokio::test]
async fn test_move_order_invalid_type_sends_nothing() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let err = client
        .move_order(&MoveOrderRequest::new(1, dec("0.1")).order_type(OrderType::FillOrKill))
        .await
        .unwrap_err();

    assert!(matches!(err, PoloniexError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_order_type_from_unknown_string() {
    let err = "market".parse::<OrderType>().unwrap_err();
    assert!(matches!(err, PoloniexError::Validation(_)));
}

#[tokio::test]
async fn test_transfer_from_all_sends_nothing() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let request = TransferBalanceRequest::new("btc", dec("1"), Account::All, Account::Lending);
    let err = client.transfer_balance(&request).await.unwrap_err();

    assert!(matches!(err, PoloniexError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_credentials_send_nothing() {
    let server = MockServer::start().await;
    let client = PoloniexClient::builder().base_url(server.uri()).build();

    assert!(matches!(
        client.return_balances().await,
        Err(PoloniexError::MissingCredentials)
    ));
    assert!(matches!(
        client.cancel_order(1).await,
        Err(PoloniexError::MissingCredentials)
    ));
    assert!(matches!(
        client
            .withdraw(&WithdrawRequest::new("btc", dec("1"), "addr"))
            .await,
        Err(PoloniexError::MissingCredentials)
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_credentials_send_nothing() {
    let server = MockServer::start().await;
    let client = PoloniexClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("", "")))
        .build();

    let err = client.return_deposit_addresses().await.unwrap_err();
    assert!(matches!(err, PoloniexError::MissingCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deposits_withdrawals_default_window() {
    let server = MockServer::start().await;
    mount_ok(
        &server,
        serde_json::json!({ "deposits": [], "withdrawals": [] }),
    )
    .await;

    let client = build_client(&server);
    client
        .return_deposits_withdrawals(TimeRange::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let params = body_params(&requests[0]);
    assert_eq!(params["start"], (NOW - 30 * 86_400).to_string());
    assert_eq!(params["end"], NOW.to_string());
}

#[tokio::test]
async fn test_exchange_error_returned_verbatim() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "error": "Nonce must be greater than 1700000000000000. You provided 1."
    });
    mount_ok(&server, response.clone()).await;

    let client = build_client(&server);
    let body = client.return_complete_balances(Account::All).await.unwrap();
    assert_eq!(body, response);
}
