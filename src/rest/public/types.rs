//! Request types for public REST API commands.

use crate::types::{ALL, ChartPeriod, TimeRange};

/// Request parameters for the order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBookRequest {
    /// Market, e.g. `BTC_ETH`, or `ALL` (default).
    pub currency_pair: String,
    /// Number of price levels per side (default: 20).
    pub depth: u32,
}

impl OrderBookRequest {
    /// Default order book depth.
    pub const DEFAULT_DEPTH: u32 = 20;

    /// Create a new request for a single market.
    pub fn new(currency_pair: impl Into<String>) -> Self {
        Self {
            currency_pair: currency_pair.into(),
            depth: Self::DEFAULT_DEPTH,
        }
    }

    /// Set the depth.
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for OrderBookRequest {
    fn default() -> Self {
        Self::new(ALL)
    }
}

/// Request parameters for the public trade history of a market.
///
/// Bounds left unset are omitted, letting the exchange return its most
/// recent trades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketTradeHistoryRequest {
    /// Market, e.g. `BTC_ETH`.
    pub currency_pair: String,
    /// Optional window in UNIX seconds.
    pub range: TimeRange,
}

impl MarketTradeHistoryRequest {
    /// Create a new request for a market.
    pub fn new(currency_pair: impl Into<String>) -> Self {
        Self {
            currency_pair: currency_pair.into(),
            range: TimeRange::default(),
        }
    }

    /// Set the start of the window.
    pub fn start(mut self, start: i64) -> Self {
        self.range.start = Some(start);
        self
    }

    /// Set the end of the window.
    pub fn end(mut self, end: i64) -> Self {
        self.range.end = Some(end);
        self
    }
}

/// Request parameters for candlestick data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDataRequest {
    /// Market, e.g. `BTC_ETH`.
    pub currency_pair: String,
    /// Candle length in seconds. Checked against [`ChartPeriod`] when sent.
    pub period: u32,
    /// Window in UNIX seconds; defaults to the last month.
    pub range: TimeRange,
}

impl ChartDataRequest {
    /// Create a new request with the candle length in seconds.
    pub fn new(currency_pair: impl Into<String>, period: u32) -> Self {
        Self {
            currency_pair: currency_pair.into(),
            period,
            range: TimeRange::default(),
        }
    }

    /// Create a new request with a known-good period.
    pub fn for_period(currency_pair: impl Into<String>, period: ChartPeriod) -> Self {
        Self::new(currency_pair, period.as_secs())
    }

    /// Set the start of the window.
    pub fn start(mut self, start: i64) -> Self {
        self.range.start = Some(start);
        self
    }

    /// Set the end of the window.
    pub fn end(mut self, end: i64) -> Self {
        self.range.end = Some(end);
        self
    }

    /// The validated period.
    pub fn chart_period(&self) -> Result<ChartPeriod, crate::PoloniexError> {
        ChartPeriod::try_from(self.period)
    }
}
