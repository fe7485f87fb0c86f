//! # Poloniex Client
//!
//! An async Rust client library for the Poloniex REST trading API.
//!
//! ## Features
//!
//! - Public market data: ticker, 24h volume, order book, trade history,
//!   candlesticks, currencies, loan orders
//! - Private account, trading, margin and lending commands
//! - HMAC-SHA512 request signing with strictly increasing nonces
//! - Responses returned as raw `serde_json::Value`
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poloniex_api_client::rest::PoloniexClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PoloniexClient::new();
//!     let ticker = client.return_ticker().await?;
//!     println!("Ticker: {}", ticker);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod clock;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, PoloniexError};
pub use rest::PoloniexClient;
pub use types::{Account, ChartPeriod, OrderType};

/// Result type alias using PoloniexError
pub type Result<T> = std::result::Result<T, PoloniexError>;
