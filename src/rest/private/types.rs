//! Request types for private REST API commands.

use rust_decimal::Decimal;

use crate::types::{ALL, Account, OrderType, TimeRange};

/// Request for the account's own trade history.
///
/// Bounds and limit left unset are omitted from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeHistoryRequest {
    /// Market, or `ALL` (default).
    pub currency_pair: String,
    /// Optional window in UNIX seconds.
    pub range: TimeRange,
    /// Maximum number of trades.
    pub limit: Option<u32>,
}

impl TradeHistoryRequest {
    /// Create a new request for a market.
    pub fn new(currency_pair: impl Into<String>) -> Self {
        Self {
            currency_pair: currency_pair.into(),
            range: TimeRange::default(),
            limit: None,
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

    /// Set the maximum number of trades.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Default for TradeHistoryRequest {
    fn default() -> Self {
        Self::new(ALL)
    }
}

/// Request for lending history. The window defaults to the last month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LendingHistoryRequest {
    /// Window in UNIX seconds.
    pub range: TimeRange,
    /// Maximum number of entries.
    pub limit: Option<u32>,
}

impl LendingHistoryRequest {
    /// Set the window.
    pub fn range(mut self, range: TimeRange) -> Self {
        self.range = range;
        self
    }

    /// Set the maximum number of entries.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Request to create a loan offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanOfferRequest {
    /// Currency to lend.
    pub currency: String,
    /// Amount to lend.
    pub amount: Decimal,
    /// Daily lending rate.
    pub lending_rate: Decimal,
    /// Loan duration in days (default: 2).
    pub duration: u32,
    /// Renew the offer automatically when the loan ends.
    pub auto_renew: bool,
}

impl LoanOfferRequest {
    /// Default loan duration in days.
    pub const DEFAULT_DURATION: u32 = 2;

    /// Create a new loan offer request.
    pub fn new(currency: impl Into<String>, amount: Decimal, lending_rate: Decimal) -> Self {
        Self {
            currency: currency.into(),
            amount,
            lending_rate,
            duration: Self::DEFAULT_DURATION,
            auto_renew: false,
        }
    }

    /// Set the duration in days.
    pub fn duration(mut self, days: u32) -> Self {
        self.duration = days;
        self
    }

    /// Enable or disable auto-renew.
    pub fn auto_renew(mut self, auto_renew: bool) -> Self {
        self.auto_renew = auto_renew;
        self
    }
}

/// Request to place a limit buy or sell order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Market, e.g. `BTC_ETH`.
    pub currency_pair: String,
    /// Limit price.
    pub rate: Decimal,
    /// Quantity.
    pub amount: Decimal,
    /// Optional execution constraint.
    pub order_type: Option<OrderType>,
}

impl OrderRequest {
    /// Create a new limit order request.
    pub fn new(currency_pair: impl Into<String>, rate: Decimal, amount: Decimal) -> Self {
        Self {
            currency_pair: currency_pair.into(),
            rate,
            amount,
            order_type: None,
        }
    }

    /// Set the execution constraint.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }
}

/// Request to cancel an order and place a new one at a different rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOrderRequest {
    /// Order to replace.
    pub order_number: u64,
    /// New limit price.
    pub rate: Decimal,
    /// New quantity; the remaining amount is kept if unset.
    pub amount: Option<Decimal>,
    /// Optional execution constraint (`immediateOrCancel` or `postOnly`).
    pub order_type: Option<OrderType>,
}

impl MoveOrderRequest {
    /// Create a new move order request.
    pub fn new(order_number: u64, rate: Decimal) -> Self {
        Self {
            order_number,
            rate,
            amount: None,
            order_type: None,
        }
    }

    /// Set the new quantity.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the execution constraint.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }
}

/// Request to withdraw funds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawRequest {
    /// Currency to withdraw.
    pub currency: String,
    /// Amount to withdraw.
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
    /// Payment ID or memo, for currencies that need one.
    pub payment_id: Option<String>,
}

impl WithdrawRequest {
    /// Create a new withdrawal request.
    pub fn new(currency: impl Into<String>, amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            address: address.into(),
            payment_id: None,
        }
    }

    /// Set the payment ID.
    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }
}

/// Request to move funds between wallets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferBalanceRequest {
    /// Currency to move.
    pub currency: String,
    /// Amount to move.
    pub amount: Decimal,
    /// Source wallet.
    pub from_account: Account,
    /// Destination wallet.
    pub to_account: Account,
    /// Skip the exchange's confirmation step.
    pub confirmed: bool,
}

impl TransferBalanceRequest {
    /// Create a new transfer request.
    pub fn new(
        currency: impl Into<String>,
        amount: Decimal,
        from_account: Account,
        to_account: Account,
    ) -> Self {
        Self {
            currency: currency.into(),
            amount,
            from_account,
            to_account,
            confirmed: false,
        }
    }

    /// Mark the transfer as confirmed.
    pub fn confirmed(mut self) -> Self {
        self.confirmed = true;
        self
    }
}

/// Request to place a margin order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginOrderRequest {
    /// Market, e.g. `BTC_ETH`.
    pub currency_pair: String,
    /// Limit price.
    pub rate: Decimal,
    /// Quantity.
    pub amount: Decimal,
    /// Maximum lending rate accepted for the borrowed funds (default: 2).
    pub lending_rate: Decimal,
}

impl MarginOrderRequest {
    /// Create a new margin order request with the default lending rate.
    pub fn new(currency_pair: impl Into<String>, rate: Decimal, amount: Decimal) -> Self {
        Self {
            currency_pair: currency_pair.into(),
            rate,
            amount,
            lending_rate: Decimal::TWO,
        }
    }

    /// Set the maximum lending rate.
    pub fn lending_rate(mut self, lending_rate: Decimal) -> Self {
        self.lending_rate = lending_rate;
        self
    }
}
