//! Example: Fetching public market data from Poloniex.
//!
//! Run with: cargo run --example public_data

use poloniex_api_client::rest::{
    ChartDataRequest, MarketTradeHistoryRequest, OrderBookRequest, PoloniexClient,
};
use poloniex_api_client::types::ChartPeriod;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public commands (no credentials needed)
    let client = PoloniexClient::new();

    println!("=== Ticker (USDT_BTC) ===");
    let ticker = client.return_ticker().await?;
    println!("Last: {}", ticker["USDT_BTC"]["last"]);

    println!("\n=== Order Book (USDT_BTC, depth 5) ===");
    let book = client
        .return_order_book(&OrderBookRequest::new("usdt_btc").depth(5))
        .await?;
    println!("Asks: {}", book["asks"]);
    println!("Bids: {}", book["bids"]);

    println!("\n=== Recent Trades ===");
    let trades = client
        .market_trade_history(&MarketTradeHistoryRequest::new("usdt_btc"))
        .await?;
    if let Some(trades) = trades.as_array() {
        for trade in trades.iter().take(5) {
            println!("{} {} @ {}", trade["type"], trade["amount"], trade["rate"]);
        }
    }

    println!("\n=== Daily Candles (last month) ===");
    let candles = client
        .return_chart_data(&ChartDataRequest::for_period("usdt_btc", ChartPeriod::Day1))
        .await?;
    println!("{} candles", candles.as_array().map_or(0, Vec::len));

    println!("\n=== Loan Orders (BTC) ===");
    let loans = client.return_loan_orders("btc").await?;
    println!("Offers: {}", loans["offers"]);

    Ok(())
}
