//! Private REST API commands (authentication required).
//!
//! These commands require API credentials to be configured on the client.
//! Every one of them is sent as a signed POST to the trading endpoint.

mod types;

pub use types::*;

use serde_json::Value;

use crate::clock::Clock;
use crate::error::PoloniexError;
use crate::rest::PoloniexClient;
use crate::rest::endpoints::{COMMAND_PARAM, private};
use crate::types::{Account, OrderType, Params, TimeRange, normalize_symbol};

/// Flag parameters (`fillOrKill=1`, `confirmed=1`, ...) carry this value.
const FLAG_SET: &str = "1";

/// A private account, trading or lending command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateCommand {
    /// `returnBalances`
    ReturnBalances,
    /// `returnCompleteBalances`
    ReturnCompleteBalances {
        /// Wallet to report (default: all).
        account: Account,
    },
    /// `returnDepositAddresses`
    ReturnDepositAddresses,
    /// `generateNewAddress`
    GenerateNewAddress {
        /// Currency of the new address.
        currency: String,
    },
    /// `returnDepositsWithdrawals`; the window defaults to the last month.
    ReturnDepositsWithdrawals(TimeRange),
    /// `returnOpenOrders`
    ReturnOpenOrders {
        /// Market, or `ALL`.
        currency_pair: String,
    },
    /// `returnTradeHistory` (own trades)
    ReturnTradeHistory(TradeHistoryRequest),
    /// `returnAvailableAccountBalances`
    ReturnAvailableAccountBalances {
        /// Restrict to one wallet.
        account: Option<Account>,
    },
    /// `returnTradableBalances`
    ReturnTradableBalances,
    /// `returnOpenLoanOffers`
    ReturnOpenLoanOffers,
    /// `returnOrderTrades`
    ReturnOrderTrades {
        /// Order to inspect.
        order_number: u64,
    },
    /// `returnActiveLoans`
    ReturnActiveLoans,
    /// `returnLendingHistory`
    ReturnLendingHistory(LendingHistoryRequest),
    /// `createLoanOffer`
    CreateLoanOffer(LoanOfferRequest),
    /// `cancelLoanOffer`
    CancelLoanOffer {
        /// Offer to cancel.
        order_number: u64,
    },
    /// `toggleAutoRenew`
    ToggleAutoRenew {
        /// Loan to toggle.
        order_number: u64,
    },
    /// `buy`
    Buy(OrderRequest),
    /// `sell`
    Sell(OrderRequest),
    /// `cancelOrder`
    CancelOrder {
        /// Order to cancel.
        order_number: u64,
    },
    /// `moveOrder`
    MoveOrder(MoveOrderRequest),
    /// `withdraw`
    Withdraw(WithdrawRequest),
    /// `returnFeeInfo`
    ReturnFeeInfo,
    /// `transferBalance`
    TransferBalance(TransferBalanceRequest),
    /// `returnMarginAccountSummary`
    ReturnMarginAccountSummary,
    /// `marginBuy`
    MarginBuy(MarginOrderRequest),
    /// `marginSell`
    MarginSell(MarginOrderRequest),
    /// `getMarginPosition`
    GetMarginPosition {
        /// Market, or `ALL`.
        currency_pair: String,
    },
    /// `closeMarginPosition`
    CloseMarginPosition {
        /// Market to close.
        currency_pair: String,
    },
}

impl PrivateCommand {
    /// The remote command name.
    pub fn name(&self) -> &'static str {
        match self {
            PrivateCommand::ReturnBalances => private::RETURN_BALANCES,
            PrivateCommand::ReturnCompleteBalances { .. } => private::RETURN_COMPLETE_BALANCES,
            PrivateCommand::ReturnDepositAddresses => private::RETURN_DEPOSIT_ADDRESSES,
            PrivateCommand::GenerateNewAddress { .. } => private::GENERATE_NEW_ADDRESS,
            PrivateCommand::ReturnDepositsWithdrawals(_) => private::RETURN_DEPOSITS_WITHDRAWALS,
            PrivateCommand::ReturnOpenOrders { .. } => private::RETURN_OPEN_ORDERS,
            PrivateCommand::ReturnTradeHistory(_) => private::RETURN_TRADE_HISTORY,
            PrivateCommand::ReturnAvailableAccountBalances { .. } => {
                private::RETURN_AVAILABLE_ACCOUNT_BALANCES
            }
            PrivateCommand::ReturnTradableBalances => private::RETURN_TRADABLE_BALANCES,
            PrivateCommand::ReturnOpenLoanOffers => private::RETURN_OPEN_LOAN_OFFERS,
            PrivateCommand::ReturnOrderTrades { .. } => private::RETURN_ORDER_TRADES,
            PrivateCommand::ReturnActiveLoans => private::RETURN_ACTIVE_LOANS,
            PrivateCommand::ReturnLendingHistory(_) => private::RETURN_LENDING_HISTORY,
            PrivateCommand::CreateLoanOffer(_) => private::CREATE_LOAN_OFFER,
            PrivateCommand::CancelLoanOffer { .. } => private::CANCEL_LOAN_OFFER,
            PrivateCommand::ToggleAutoRenew { .. } => private::TOGGLE_AUTO_RENEW,
            PrivateCommand::Buy(_) => private::BUY,
            PrivateCommand::Sell(_) => private::SELL,
            PrivateCommand::CancelOrder { .. } => private::CANCEL_ORDER,
            PrivateCommand::MoveOrder(_) => private::MOVE_ORDER,
            PrivateCommand::Withdraw(_) => private::WITHDRAW,
            PrivateCommand::ReturnFeeInfo => private::RETURN_FEE_INFO,
            PrivateCommand::TransferBalance(_) => private::TRANSFER_BALANCE,
            PrivateCommand::ReturnMarginAccountSummary => private::RETURN_MARGIN_ACCOUNT_SUMMARY,
            PrivateCommand::MarginBuy(_) => private::MARGIN_BUY,
            PrivateCommand::MarginSell(_) => private::MARGIN_SELL,
            PrivateCommand::GetMarginPosition { .. } => private::GET_MARGIN_POSITION,
            PrivateCommand::CloseMarginPosition { .. } => private::CLOSE_MARGIN_POSITION,
        }
    }

    /// Build the body parameters, `command` included and `nonce` excluded.
    ///
    /// Fails with [`PoloniexError::Validation`] when an order type or wallet
    /// is outside what the command accepts.
    pub fn params(&self, clock: &dyn Clock) -> Result<Params, PoloniexError> {
        let params = Params::new().with(COMMAND_PARAM, self.name());

        let params = match self {
            PrivateCommand::ReturnBalances
            | PrivateCommand::ReturnDepositAddresses
            | PrivateCommand::ReturnTradableBalances
            | PrivateCommand::ReturnOpenLoanOffers
            | PrivateCommand::ReturnActiveLoans
            | PrivateCommand::ReturnFeeInfo
            | PrivateCommand::ReturnMarginAccountSummary => params,

            PrivateCommand::ReturnCompleteBalances { account } => params.with("account", account),
            PrivateCommand::ReturnAvailableAccountBalances { account } => {
                params.with_opt("account", *account)
            }
            PrivateCommand::GenerateNewAddress { currency } => {
                params.with("currency", normalize_symbol(currency))
            }
            PrivateCommand::ReturnDepositsWithdrawals(range) => {
                let (start, end) = range.resolve(clock);
                params.with("start", start).with("end", end)
            }
            PrivateCommand::ReturnOpenOrders { currency_pair }
            | PrivateCommand::GetMarginPosition { currency_pair }
            | PrivateCommand::CloseMarginPosition { currency_pair } => {
                params.with("currencyPair", normalize_symbol(currency_pair))
            }
            PrivateCommand::ReturnTradeHistory(req) => params
                .with("currencyPair", normalize_symbol(&req.currency_pair))
                .with_opt("start", req.range.start)
                .with_opt("end", req.range.end)
                .with_opt("limit", req.limit),
            PrivateCommand::ReturnOrderTrades { order_number }
            | PrivateCommand::CancelLoanOffer { order_number }
            | PrivateCommand::ToggleAutoRenew { order_number }
            | PrivateCommand::CancelOrder { order_number } => {
                params.with("orderNumber", order_number)
            }
            PrivateCommand::ReturnLendingHistory(req) => {
                let (start, end) = req.range.resolve(clock);
                params
                    .with("start", start)
                    .with("end", end)
                    .with_opt("limit", req.limit)
            }
            PrivateCommand::CreateLoanOffer(req) => params
                .with("currency", normalize_symbol(&req.currency))
                .with("amount", req.amount)
                .with("duration", req.duration)
                .with("autoRenew", u8::from(req.auto_renew))
                .with("lendingRate", req.lending_rate),
            PrivateCommand::Buy(req) | PrivateCommand::Sell(req) => {
                let order_type = req
                    .order_type
                    .map(|t| t.ensure_in(OrderType::PLACE_ORDER, self.name()))
                    .transpose()?;
                let params = params
                    .with("currencyPair", normalize_symbol(&req.currency_pair))
                    .with("rate", req.rate)
                    .with("amount", req.amount);
                with_order_type(params, order_type)
            }
            PrivateCommand::MoveOrder(req) => {
                let order_type = req
                    .order_type
                    .map(|t| t.ensure_in(OrderType::MOVE_ORDER, self.name()))
                    .transpose()?;
                let params = params
                    .with("orderNumber", req.order_number)
                    .with("rate", req.rate)
                    .with_opt("amount", req.amount);
                with_order_type(params, order_type)
            }
            PrivateCommand::Withdraw(req) => params
                .with("currency", normalize_symbol(&req.currency))
                .with("amount", req.amount)
                .with("address", &req.address)
                .with_opt("paymentId", req.payment_id.as_deref()),
            PrivateCommand::TransferBalance(req) => {
                let from = req.from_account.ensure_wallet("fromAccount")?;
                let to = req.to_account.ensure_wallet("toAccount")?;
                let params = params
                    .with("currency", normalize_symbol(&req.currency))
                    .with("amount", req.amount)
                    .with("fromAccount", from)
                    .with("toAccount", to);
                if req.confirmed {
                    params.with("confirmed", FLAG_SET)
                } else {
                    params
                }
            }
            PrivateCommand::MarginBuy(req) | PrivateCommand::MarginSell(req) => params
                .with("currencyPair", normalize_symbol(&req.currency_pair))
                .with("rate", req.rate)
                .with("amount", req.amount)
                .with("lendingRate", req.lending_rate),
        };

        Ok(params)
    }
}

/// Order types are sent as a flag named after the type, e.g. `postOnly=1`.
fn with_order_type(params: Params, order_type: Option<OrderType>) -> Params {
    match order_type {
        Some(order_type) => params.with(order_type.as_str(), FLAG_SET),
        None => params,
    }
}

impl PoloniexClient {
    // ========== Account ==========

    /// Get available balances for every currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use poloniex_api_client::rest::PoloniexClient;
    /// use poloniex_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = PoloniexClient::builder().credentials(credentials).build();
    ///
    ///     let balances = client.return_balances().await?;
    ///     println!("BTC: {}", balances["BTC"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn return_balances(&self) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnBalances).await
    }

    /// Get balances including amounts on orders and their BTC value.
    pub async fn return_complete_balances(
        &self,
        account: Account,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnCompleteBalances { account })
            .await
    }

    /// Get all deposit addresses.
    pub async fn return_deposit_addresses(&self) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnDepositAddresses)
            .await
    }

    /// Generate a new deposit address for a currency.
    pub async fn generate_new_address(&self, currency: &str) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::GenerateNewAddress {
            currency: currency.to_string(),
        })
        .await
    }

    /// Get deposits and withdrawals within a window (default: last month).
    pub async fn return_deposits_withdrawals(
        &self,
        range: TimeRange,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnDepositsWithdrawals(range))
            .await
    }

    /// Get balances per wallet, optionally for a single wallet.
    pub async fn return_available_account_balances(
        &self,
        account: Option<Account>,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnAvailableAccountBalances { account })
            .await
    }

    /// Get balances available for margin trading.
    pub async fn return_tradable_balances(&self) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnTradableBalances)
            .await
    }

    /// Get the fee schedule and trailing 30-day volume.
    pub async fn return_fee_info(&self) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnFeeInfo).await
    }

    /// Move funds between wallets.
    ///
    /// Fails without contacting the exchange if either side is [`Account::All`].
    pub async fn transfer_balance(
        &self,
        request: &TransferBalanceRequest,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::TransferBalance(request.clone()))
            .await
    }

    // ========== Trading ==========

    /// Get open orders for a market, or every market with `"all"`.
    pub async fn return_open_orders(&self, currency_pair: &str) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnOpenOrders {
            currency_pair: currency_pair.to_string(),
        })
        .await
    }

    /// Get the account's trade history.
    pub async fn return_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnTradeHistory(request.clone()))
            .await
    }

    /// Get the trades that filled an order.
    pub async fn return_order_trades(&self, order_number: u64) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnOrderTrades { order_number })
            .await
    }

    /// Place a limit buy order.
    ///
    /// # Arguments
    ///
    /// * `request` - Market, rate, amount and optional execution constraint.
    pub async fn buy(&self, request: &OrderRequest) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::Buy(request.clone()))
            .await
    }

    /// Place a limit sell order.
    pub async fn sell(&self, request: &OrderRequest) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::Sell(request.clone()))
            .await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, order_number: u64) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::CancelOrder { order_number })
            .await
    }

    /// Cancel an order and place a new one at a different rate.
    ///
    /// Only `immediateOrCancel` and `postOnly` are accepted as order types;
    /// anything else fails without contacting the exchange.
    pub async fn move_order(&self, request: &MoveOrderRequest) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::MoveOrder(request.clone()))
            .await
    }

    // ========== Funding ==========

    /// Withdraw funds to an external address.
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::Withdraw(request.clone()))
            .await
    }

    // ========== Margin ==========

    /// Get the margin account summary.
    pub async fn return_margin_account_summary(&self) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnMarginAccountSummary)
            .await
    }

    /// Place a margin buy order.
    pub async fn margin_buy(&self, request: &MarginOrderRequest) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::MarginBuy(request.clone()))
            .await
    }

    /// Place a margin sell order.
    pub async fn margin_sell(&self, request: &MarginOrderRequest) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::MarginSell(request.clone()))
            .await
    }

    /// Get the margin position for a market, or every market with `"all"`.
    pub async fn get_margin_position(&self, currency_pair: &str) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::GetMarginPosition {
            currency_pair: currency_pair.to_string(),
        })
        .await
    }

    /// Close the margin position of a market at market price.
    pub async fn close_margin_position(
        &self,
        currency_pair: &str,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::CloseMarginPosition {
            currency_pair: currency_pair.to_string(),
        })
        .await
    }

    // ========== Lending ==========

    /// Get open loan offers.
    pub async fn return_open_loan_offers(&self) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnOpenLoanOffers)
            .await
    }

    /// Get active loans.
    pub async fn return_active_loans(&self) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnActiveLoans).await
    }

    /// Get lending history (default window: last month).
    pub async fn return_lending_history(
        &self,
        request: &LendingHistoryRequest,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ReturnLendingHistory(request.clone()))
            .await
    }

    /// Create a loan offer.
    pub async fn create_loan_offer(
        &self,
        request: &LoanOfferRequest,
    ) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::CreateLoanOffer(request.clone()))
            .await
    }

    /// Cancel a loan offer.
    pub async fn cancel_loan_offer(&self, order_number: u64) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::CancelLoanOffer { order_number })
            .await
    }

    /// Toggle auto-renew on an active loan.
    pub async fn toggle_auto_renew(&self, order_number: u64) -> Result<Value, PoloniexError> {
        self.send_private(&PrivateCommand::ToggleAutoRenew { order_number })
            .await
    }
}
