//! Poloniex REST API client.
//!
//! Provides access to the public market-data commands and the private
//! account, trading and lending commands.
//!
//! Every command is a variant of [`PublicCommand`] or [`PrivateCommand`];
//! the named methods on [`PoloniexClient`] are thin wrappers that build the
//! variant and send it.
//!
//! # Trait-based API
//!
//! The [`PoloniexApi`] trait abstracts command dispatch, enabling mock
//! implementations for testing.

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{PoloniexClient, PoloniexClientBuilder};
pub use endpoints::*;
pub use private::{
    LendingHistoryRequest, LoanOfferRequest, MarginOrderRequest, MoveOrderRequest, OrderRequest,
    PrivateCommand, TradeHistoryRequest, TransferBalanceRequest, WithdrawRequest,
};
pub use public::{ChartDataRequest, MarketTradeHistoryRequest, OrderBookRequest, PublicCommand};
pub use traits::PoloniexApi;
