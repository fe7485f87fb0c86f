//! Example: Private account and trading commands.
//!
//! Reads credentials from `POLONIEX_API_KEY` / `POLONIEX_API_SECRET`
//! (a `.env` file works too).
//!
//! Run with: cargo run --example private_trading

use std::sync::Arc;

use poloniex_api_client::ApiError;
use poloniex_api_client::auth::EnvCredentials;
use poloniex_api_client::rest::{OrderRequest, PoloniexClient};
use poloniex_api_client::types::OrderType;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(credentials) = EnvCredentials::try_from_env() else {
        println!("Set POLONIEX_API_KEY and POLONIEX_API_SECRET to run this example.");
        return Ok(());
    };
    let client = PoloniexClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    println!("=== Balances ===");
    let balances = client.return_balances().await?;
    if let Some(error) = ApiError::from_response(&balances) {
        println!("Exchange rejected the request: {error}");
        return Ok(());
    }
    println!("BTC: {}", balances["BTC"]);

    println!("\n=== Fee Info ===");
    println!("{}", client.return_fee_info().await?);

    // A post-only bid far below the market, cancelled right away.
    println!("\n=== Place and cancel ===");
    let order = OrderRequest::new("usdt_btc", Decimal::new(1000, 0), Decimal::new(1, 3))
        .order_type(OrderType::PostOnly);
    let placed = client.buy(&order).await?;
    match placed["orderNumber"].as_str().and_then(|n| n.parse::<u64>().ok()) {
        Some(order_number) => {
            println!("Placed order {order_number}");
            println!("Cancel: {}", client.cancel_order(order_number).await?);
        }
        None => println!("Order not placed: {placed}"),
    }

    Ok(())
}
