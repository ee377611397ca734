//! Type definitions for the trade book
//!
//! Wire names follow the public API: snake_case on the trade itself,
//! camelCase inside `trade_details`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuySellIndicator {
    Buy,
    Sell,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid trade type: {0} (expected BUY or SELL)")]
pub struct InvalidTradeType(pub String);

impl BuySellIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuySellIndicator::Buy => "BUY",
            BuySellIndicator::Sell => "SELL",
        }
    }
}

impl FromStr for BuySellIndicator {
    type Err = InvalidTradeType;

    /// Exact match only - `buy` is not `BUY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(BuySellIndicator::Buy),
            "SELL" => Ok(BuySellIndicator::Sell),
            other => Err(InvalidTradeType(other.to_string())),
        }
    }
}

impl fmt::Display for BuySellIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price, quantity and side of a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDetails {
    #[serde(rename = "buySellIndicator")]
    pub buy_sell_indicator: BuySellIndicator,
    pub price: Decimal,
    pub quantity: u64,
}

/// A single executed trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Bond, Equity, FX...
    #[serde(default)]
    pub asset_class: Option<String>,
    /// Not always available
    #[serde(default)]
    pub counterparty: Option<String>,
    /// ISIN or ticker, e.g. TSLA
    pub instrument_id: String,
    pub instrument_name: String,
    pub trade_date_time: DateTime<Utc>,
    pub trade_details: TradeDetails,
    /// Intended to be unique, never enforced
    #[serde(default)]
    pub trade_id: Option<String>,
    pub trader: String,
}

/// Writes `Some` values bare and absent values as `None`.
struct OptText<'a>(&'a Option<String>);

impl fmt::Display for OptText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(s) => write!(f, "'{}'", s),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Trade {
    /// Full textual rendering of every field; free-text search runs against this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "asset_class={} counterparty={} instrument_id='{}' instrument_name='{}' \
             trade_date_time={} trade_details=TradeDetails(buySellIndicator='{}', \
             price={}, quantity={}) trade_id={} trader='{}'",
            OptText(&self.asset_class),
            OptText(&self.counterparty),
            self.instrument_id,
            self.instrument_name,
            self.trade_date_time.to_rfc3339(),
            self.trade_details.buy_sell_indicator,
            self.trade_details.price,
            self.trade_details.quantity,
            OptText(&self.trade_id),
            self.trader,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sample() -> Trade {
        Trade {
            asset_class: Some("FX".to_string()),
            counterparty: None,
            instrument_id: "EURUSD".to_string(),
            instrument_name: "Euro/US Dollar".to_string(),
            trade_date_time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            trade_details: TradeDetails {
                buy_sell_indicator: BuySellIndicator::Sell,
                price: dec!(1.2),
                quantity: 10000,
            },
            trade_id: Some("4".to_string()),
            trader: "Raj Anand".to_string(),
        }
    }

    #[test]
    fn test_trade_type_parse_is_exact() {
        assert_eq!("BUY".parse::<BuySellIndicator>(), Ok(BuySellIndicator::Buy));
        assert_eq!("SELL".parse::<BuySellIndicator>(), Ok(BuySellIndicator::Sell));
        assert!("buy".parse::<BuySellIndicator>().is_err());
        assert!("HOLD".parse::<BuySellIndicator>().is_err());
    }

    #[test]
    fn test_serializes_with_api_field_names() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["instrument_id"], "EURUSD");
        assert_eq!(json["asset_class"], "FX");
        assert!(json["counterparty"].is_null());
        assert_eq!(json["trade_details"]["buySellIndicator"], "SELL");
        assert_eq!(json["trade_details"]["price"], 1.2);
        assert_eq!(json["trade_details"]["quantity"], 10000);
        assert_eq!(json["trade_date_time"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_missing_optional_fields_deserialize_as_absent() {
        let trade: Trade = serde_json::from_value(serde_json::json!({
            "instrument_id": "AAPL",
            "instrument_name": "Apple Inc",
            "trade_date_time": "2024-03-01T12:00:00Z",
            "trade_details": { "buySellIndicator": "BUY", "price": 100.0, "quantity": 10 },
            "trader": "Mohan Raj"
        }))
        .unwrap();

        assert_eq!(trade.asset_class, None);
        assert_eq!(trade.counterparty, None);
        assert_eq!(trade.trade_id, None);
    }

    #[test]
    fn test_display_covers_every_field() {
        let text = sample().to_string();

        for needle in ["'FX'", "counterparty=None", "EURUSD", "Euro/US Dollar", "SELL", "1.2", "10000", "'4'", "Raj Anand"] {
            assert!(text.contains(needle), "missing {needle} in {text}");
        }
    }
}
