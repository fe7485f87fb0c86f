//! Common domain types for Poloniex API.

use std::str::FromStr;

use crate::clock::{Clock, MONTH};
use crate::error::PoloniexError;

/// The pseudo-pair/currency meaning "every market".
pub const ALL: &str = "ALL";

/// Upper-case a currency or currency pair the way the exchange expects it.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Execution constraint for limit orders.
///
/// Sent as a flag parameter named after the variant with the value `1`,
/// e.g. `postOnly=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// Fill the whole order immediately or cancel it
    FillOrKill,
    /// Fill what is possible immediately, cancel the rest
    ImmediateOrCancel,
    /// Only add liquidity; cancel if the order would match
    PostOnly,
}

impl OrderType {
    /// Types accepted by `buy` and `sell`.
    pub const PLACE_ORDER: &'static [OrderType] =
        &[Self::FillOrKill, Self::ImmediateOrCancel, Self::PostOnly];

    /// Types accepted by `moveOrder`.
    pub const MOVE_ORDER: &'static [OrderType] = &[Self::ImmediateOrCancel, Self::PostOnly];

    /// The parameter name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::FillOrKill => "fillOrKill",
            OrderType::ImmediateOrCancel => "immediateOrCancel",
            OrderType::PostOnly => "postOnly",
        }
    }

    /// Fail unless `self` is one of `allowed`.
    pub fn ensure_in(self, allowed: &[OrderType], command: &str) -> Result<Self, PoloniexError> {
        if allowed.contains(&self) {
            Ok(self)
        } else {
            Err(PoloniexError::validation(format!(
                "Invalid orderType for {command}: {self}"
            )))
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = PoloniexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fillOrKill" => Ok(OrderType::FillOrKill),
            "immediateOrCancel" => Ok(OrderType::ImmediateOrCancel),
            "postOnly" => Ok(OrderType::PostOnly),
            other => Err(PoloniexError::validation(format!("Invalid orderType: {other}"))),
        }
    }
}

/// A wallet within the account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Account {
    /// Every wallet (only valid as a query filter)
    #[default]
    All,
    /// Spot exchange wallet
    Exchange,
    /// Margin wallet
    Margin,
    /// Lending wallet
    Lending,
}

impl Account {
    /// The value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Account::All => "all",
            Account::Exchange => "exchange",
            Account::Margin => "margin",
            Account::Lending => "lending",
        }
    }

    /// Fail if `self` is [`Account::All`], which cannot hold funds.
    pub fn ensure_wallet(self, field: &str) -> Result<Self, PoloniexError> {
        match self {
            Account::All => Err(PoloniexError::validation(format!(
                "Invalid {field}: \"all\" is not a wallet"
            ))),
            wallet => Ok(wallet),
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Account {
    type Err = PoloniexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Account::All),
            "exchange" => Ok(Account::Exchange),
            "margin" => Ok(Account::Margin),
            "lending" => Ok(Account::Lending),
            other => Err(PoloniexError::validation(format!("Invalid account: {other}"))),
        }
    }
}

/// Candlestick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPeriod {
    /// 5 minutes
    Min5,
    /// 15 minutes
    Min15,
    /// 30 minutes
    Min30,
    /// 2 hours
    Hour2,
    /// 4 hours
    Hour4,
    /// 1 day
    Day1,
}

impl ChartPeriod {
    /// All supported periods, shortest first.
    pub const ALL: [ChartPeriod; 6] = [
        Self::Min5,
        Self::Min15,
        Self::Min30,
        Self::Hour2,
        Self::Hour4,
        Self::Day1,
    ];

    /// Length of one candle in seconds.
    pub fn as_secs(&self) -> u32 {
        match self {
            ChartPeriod::Min5 => 300,
            ChartPeriod::Min15 => 900,
            ChartPeriod::Min30 => 1800,
            ChartPeriod::Hour2 => 7200,
            ChartPeriod::Hour4 => 14400,
            ChartPeriod::Day1 => 86400,
        }
    }
}

impl TryFrom<u32> for ChartPeriod {
    type Error = PoloniexError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_secs() == secs)
            .ok_or_else(|| PoloniexError::validation(format!("Invalid candle period: {secs}")))
    }
}

impl From<ChartPeriod> for u32 {
    fn from(period: ChartPeriod) -> Self {
        period.as_secs()
    }
}

impl std::fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

/// An optional `[start, end]` window in seconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Start of the window.
    pub start: Option<i64>,
    /// End of the window.
    pub end: Option<i64>,
}

impl TimeRange {
    /// A window with both bounds set.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Resolve missing bounds: `end` defaults to now and `start` to one
    /// month before now.
    pub fn resolve(&self, clock: &dyn Clock) -> (i64, i64) {
        let now = clock.unix_timestamp();
        (
            self.start.unwrap_or(now - MONTH.whole_seconds()),
            self.end.unwrap_or(now),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_order_type_parse() {
        assert_eq!("postOnly".parse::<OrderType>().unwrap(), OrderType::PostOnly);
        assert_eq!(OrderType::FillOrKill.to_string(), "fillOrKill");

        let err = "market".parse::<OrderType>().unwrap_err();
        assert!(matches!(err, PoloniexError::Validation(_)));
    }

    #[test]
    fn test_order_type_allow_lists() {
        assert!(OrderType::FillOrKill.ensure_in(OrderType::PLACE_ORDER, "buy").is_ok());
        let err = OrderType::FillOrKill
            .ensure_in(OrderType::MOVE_ORDER, "moveOrder")
            .unwrap_err();
        assert!(err.to_string().contains("moveOrder"));
    }

    #[test]
    fn test_account_parse_and_wallet_check() {
        assert_eq!("margin".parse::<Account>().unwrap(), Account::Margin);
        assert!("savings".parse::<Account>().is_err());
        assert!(Account::All.ensure_wallet("fromAccount").is_err());
        assert_eq!(Account::Lending.ensure_wallet("toAccount").unwrap(), Account::Lending);
    }

    #[test]
    fn test_chart_period_allow_list() {
        for secs in [300, 900, 1800, 7200, 14400, 86400] {
            assert_eq!(ChartPeriod::try_from(secs).unwrap().as_secs(), secs);
        }
        for secs in [0, 60, 123, 3600, 86401] {
            assert!(matches!(
                ChartPeriod::try_from(secs),
                Err(PoloniexError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_time_range_defaults() {
        let clock = FixedClock::from_unix_timestamp(1_700_000_000);
        assert_eq!(
            TimeRange::default().resolve(&clock),
            (1_700_000_000 - 2_592_000, 1_700_000_000)
        );
        assert_eq!(
            TimeRange { start: Some(5), end: None }.resolve(&clock),
            (5, 1_700_000_000)
        );
        assert_eq!(TimeRange::new(1, 2).resolve(&clock), (1, 2));
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("btc_eth"), "BTC_ETH");
        assert_eq!(normalize_symbol(" all "), ALL);
    }
}
