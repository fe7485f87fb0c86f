//! Public REST API commands (no authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::clock::Clock;
use crate::error::PoloniexError;
use crate::rest::PoloniexClient;
use crate::rest::endpoints::{COMMAND_PARAM, public};
use crate::types::{Params, normalize_symbol};

/// A public market-data command.
///
/// Each variant maps to one remote command and a fixed set of query
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicCommand {
    /// `returnTicker`
    ReturnTicker,
    /// `return24hVolume`
    Return24hVolume,
    /// `returnOrderBook`
    ReturnOrderBook(OrderBookRequest),
    /// `returnTradeHistory` (public market trades)
    ReturnTradeHistory(MarketTradeHistoryRequest),
    /// `returnChartData`
    ReturnChartData(ChartDataRequest),
    /// `returnCurrencies`
    ReturnCurrencies,
    /// `returnLoanOrders`
    ReturnLoanOrders {
        /// Currency, e.g. `BTC`.
        currency: String,
    },
}

impl PublicCommand {
    /// The remote command name.
    pub fn name(&self) -> &'static str {
        match self {
            PublicCommand::ReturnTicker => public::RETURN_TICKER,
            PublicCommand::Return24hVolume => public::RETURN_24H_VOLUME,
            PublicCommand::ReturnOrderBook(_) => public::RETURN_ORDER_BOOK,
            PublicCommand::ReturnTradeHistory(_) => public::RETURN_TRADE_HISTORY,
            PublicCommand::ReturnChartData(_) => public::RETURN_CHART_DATA,
            PublicCommand::ReturnCurrencies => public::RETURN_CURRENCIES,
            PublicCommand::ReturnLoanOrders { .. } => public::RETURN_LOAN_ORDERS,
        }
    }

    /// Build the query parameters, `command` included.
    ///
    /// Fails with [`PoloniexError::Validation`] for an unsupported chart period.
    pub fn params(&self, clock: &dyn Clock) -> Result<Params, PoloniexError> {
        let params = Params::new().with(COMMAND_PARAM, self.name());

        let params = match self {
            PublicCommand::ReturnTicker
            | PublicCommand::Return24hVolume
            | PublicCommand::ReturnCurrencies => params,
            PublicCommand::ReturnOrderBook(req) => params
                .with("currencyPair", normalize_symbol(&req.currency_pair))
                .with("depth", req.depth),
            PublicCommand::ReturnTradeHistory(req) => params
                .with("currencyPair", normalize_symbol(&req.currency_pair))
                .with_opt("start", req.range.start)
                .with_opt("end", req.range.end),
            PublicCommand::ReturnChartData(req) => {
                let period = req.chart_period()?;
                let (start, end) = req.range.resolve(clock);
                params
                    .with("currencyPair", normalize_symbol(&req.currency_pair))
                    .with("period", period)
                    .with("start", start)
                    .with("end", end)
            }
            PublicCommand::ReturnLoanOrders { currency } => {
                params.with("currency", normalize_symbol(currency))
            }
        };

        Ok(params)
    }
}

impl PoloniexClient {
    /// Get the ticker for all markets.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use poloniex_api_client::rest::PoloniexClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PoloniexClient::new();
    ///     let ticker = client.return_ticker().await?;
    ///     println!("BTC_ETH last: {}", ticker["BTC_ETH"]["last"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn return_ticker(&self) -> Result<Value, PoloniexError> {
        self.send_public(&PublicCommand::ReturnTicker).await
    }

    /// Get the 24-hour volume for all markets.
    pub async fn return_24h_volume(&self) -> Result<Value, PoloniexError> {
        self.send_public(&PublicCommand::Return24hVolume).await
    }

    /// Get the order book.
    ///
    /// # Arguments
    ///
    /// * `request` - Market and depth. The pair is upper-cased before sending.
    pub async fn return_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> Result<Value, PoloniexError> {
        self.send_public(&PublicCommand::ReturnOrderBook(request.clone()))
            .await
    }

    /// Get the public trade history of a market.
    pub async fn market_trade_history(
        &self,
        request: &MarketTradeHistoryRequest,
    ) -> Result<Value, PoloniexError> {
        self.send_public(&PublicCommand::ReturnTradeHistory(request.clone()))
            .await
    }

    /// Get candlestick data.
    ///
    /// Fails without contacting the exchange if the period is not one of
    /// 300, 900, 1800, 7200, 14400 or 86400 seconds.
    pub async fn return_chart_data(
        &self,
        request: &ChartDataRequest,
    ) -> Result<Value, PoloniexError> {
        self.send_public(&PublicCommand::ReturnChartData(request.clone()))
            .await
    }

    /// Get the list of currencies.
    pub async fn return_currencies(&self) -> Result<Value, PoloniexError> {
        self.send_public(&PublicCommand::ReturnCurrencies).await
    }

    /// Get open loan offers and demands for a currency.
    pub async fn return_loan_orders(&self, currency: &str) -> Result<Value, PoloniexError> {
        self.send_public(&PublicCommand::ReturnLoanOrders {
            currency: currency.to_string(),
        })
        .await
    }
}
