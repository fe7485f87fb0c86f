//! Trait definition for the Poloniex REST API client.
//!
//! [`PoloniexApi`] abstracts command dispatch so callers can depend on it
//! instead of the concrete client. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., an audit log around private commands)
//!
//! # Example
//!
//! ```rust,ignore
//! use poloniex_api_client::rest::{PoloniexApi, PoloniexClient, PublicCommand};
//!
//! async fn ticker<C: PoloniexApi>(client: &C) -> Result<(), poloniex_api_client::PoloniexError> {
//!     let ticker = client.send_public(&PublicCommand::ReturnTicker).await?;
//!     println!("{}", ticker["BTC_ETH"]);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::PoloniexError;
use crate::rest::private::PrivateCommand;
use crate::rest::public::PublicCommand;

/// Dispatches Poloniex commands.
///
/// All methods are async and return the raw JSON body.
pub trait PoloniexApi: Send + Sync {
    /// Send a public market-data command.
    fn send_public(
        &self,
        command: &PublicCommand,
    ) -> impl Future<Output = Result<Value, PoloniexError>> + Send;

    /// Send a signed private command.
    fn send_private(
        &self,
        command: &PrivateCommand,
    ) -> impl Future<Output = Result<Value, PoloniexError>> + Send;
}
