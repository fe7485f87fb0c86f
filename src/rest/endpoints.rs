//! Poloniex REST API endpoint and command constants.

/// URL of the public market-data endpoint. Commands go in the query string.
pub const POLONIEX_PUBLIC_URL: &str = "https://poloniex.com/public";

/// URL of the private trading endpoint. Commands go in the signed POST body.
pub const POLONIEX_PRIVATE_URL: &str = "https://poloniex.com/tradingApi";

/// Name of the parameter carrying the command.
pub const COMMAND_PARAM: &str = "command";

/// Public commands (no authentication required).
pub mod public {
    /// Ticker for all markets.
    pub const RETURN_TICKER: &str = "returnTicker";
    /// 24-hour volume for all markets.
    pub const RETURN_24H_VOLUME: &str = "return24hVolume";
    /// Order book for one or all markets.
    pub const RETURN_ORDER_BOOK: &str = "returnOrderBook";
    /// Public trade history for a market.
    pub const RETURN_TRADE_HISTORY: &str = "returnTradeHistory";
    /// Candlestick data for a market.
    pub const RETURN_CHART_DATA: &str = "returnChartData";
    /// Currency list.
    pub const RETURN_CURRENCIES: &str = "returnCurrencies";
    /// Loan offers and demands for a currency.
    pub const RETURN_LOAN_ORDERS: &str = "returnLoanOrders";
}

/// Private commands (authentication required).
pub mod private {
    // Account
    /// Available balances.
    pub const RETURN_BALANCES: &str = "returnBalances";
    /// Balances including on-order and BTC value.
    pub const RETURN_COMPLETE_BALANCES: &str = "returnCompleteBalances";
    /// Deposit addresses.
    pub const RETURN_DEPOSIT_ADDRESSES: &str = "returnDepositAddresses";
    /// Generate a new deposit address.
    pub const GENERATE_NEW_ADDRESS: &str = "generateNewAddress";
    /// Deposit and withdrawal history.
    pub const RETURN_DEPOSITS_WITHDRAWALS: &str = "returnDepositsWithdrawals";
    /// Balances per wallet.
    pub const RETURN_AVAILABLE_ACCOUNT_BALANCES: &str = "returnAvailableAccountBalances";
    /// Margin-tradable balances.
    pub const RETURN_TRADABLE_BALANCES: &str = "returnTradableBalances";
    /// Fee schedule and 30-day volume.
    pub const RETURN_FEE_INFO: &str = "returnFeeInfo";
    /// Move funds between wallets.
    pub const TRANSFER_BALANCE: &str = "transferBalance";

    // Trading
    /// Open orders.
    pub const RETURN_OPEN_ORDERS: &str = "returnOpenOrders";
    /// Own trade history.
    pub const RETURN_TRADE_HISTORY: &str = "returnTradeHistory";
    /// Trades of one order.
    pub const RETURN_ORDER_TRADES: &str = "returnOrderTrades";
    /// Place a buy order.
    pub const BUY: &str = "buy";
    /// Place a sell order.
    pub const SELL: &str = "sell";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "cancelOrder";
    /// Cancel and replace an order.
    pub const MOVE_ORDER: &str = "moveOrder";

    // Funding
    /// Withdraw funds.
    pub const WITHDRAW: &str = "withdraw";

    // Margin
    /// Margin account summary.
    pub const RETURN_MARGIN_ACCOUNT_SUMMARY: &str = "returnMarginAccountSummary";
    /// Place a margin buy order.
    pub const MARGIN_BUY: &str = "marginBuy";
    /// Place a margin sell order.
    pub const MARGIN_SELL: &str = "marginSell";
    /// Open margin position.
    pub const GET_MARGIN_POSITION: &str = "getMarginPosition";
    /// Close a margin position at market.
    pub const CLOSE_MARGIN_POSITION: &str = "closeMarginPosition";

    // Lending
    /// Open loan offers.
    pub const RETURN_OPEN_LOAN_OFFERS: &str = "returnOpenLoanOffers";
    /// Active loans.
    pub const RETURN_ACTIVE_LOANS: &str = "returnActiveLoans";
    /// Lending history.
    pub const RETURN_LENDING_HISTORY: &str = "returnLendingHistory";
    /// Create a loan offer.
    pub const CREATE_LOAN_OFFER: &str = "createLoanOffer";
    /// Cancel a loan offer.
    pub const CANCEL_LOAN_OFFER: &str = "cancelLoanOffer";
    /// Toggle auto-renew on an active loan.
    pub const TOGGLE_AUTO_RENEW: &str = "toggleAutoRenew";
}
