//! Query criteria and sortable fields

use crate::types::{BuySellIndicator, Trade};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Page size when the caller gives none
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),
}

/// Filter, sort and page settings for a trade listing.
///
/// Every filter is `Option` so an explicit zero or empty string stays
/// distinguishable from "not given".
#[derive(Debug, Clone, PartialEq)]
pub struct TradeCriteria {
    pub search: Option<String>,
    pub asset_class: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub trade_type: Option<BuySellIndicator>,
    pub sort_by: Option<SortField>,
    pub skip: usize,
    pub limit: usize,
}

impl Default for TradeCriteria {
    fn default() -> Self {
        Self {
            search: None,
            asset_class: None,
            start: None,
            end: None,
            min_price: None,
            max_price: None,
            trade_type: None,
            sort_by: None,
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TradeCriteria {
    /// True when `trade` passes every filter that is set
    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(needle) = &self.search {
            if !trade.to_string().to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(asset_class) = &self.asset_class {
            if trade.asset_class.as_deref() != Some(asset_class.as_str()) {
                return false;
            }
        }
        if let Some(start) = self.start {
            if trade.trade_date_time < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if trade.trade_date_time > end {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if trade.trade_details.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if trade.trade_details.price > max {
                return false;
            }
        }
        if let Some(side) = self.trade_type {
            if trade.trade_details.buy_sell_indicator != side {
                return false;
            }
        }
        true
    }
}

/// Fields a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    AssetClass,
    Counterparty,
    InstrumentId,
    InstrumentName,
    TradeDateTime,
    TradeId,
    Trader,
    Price,
    Quantity,
    BuySellIndicator,
}

impl SortField {
    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::AssetClass => "asset_class",
            SortField::Counterparty => "counterparty",
            SortField::InstrumentId => "instrument_id",
            SortField::InstrumentName => "instrument_name",
            SortField::TradeDateTime => "trade_date_time",
            SortField::TradeId => "trade_id",
            SortField::Trader => "trader",
            SortField::Price => "trade_details.price",
            SortField::Quantity => "trade_details.quantity",
            SortField::BuySellIndicator => "trade_details.buySellIndicator",
        }
    }

    /// Ascending order of two trades on this field.
    ///
    /// Absent optional values order before present ones.
    pub fn compare(&self, a: &Trade, b: &Trade) -> Ordering {
        match self {
            SortField::AssetClass => a.asset_class.cmp(&b.asset_class),
            SortField::Counterparty => a.counterparty.cmp(&b.counterparty),
            SortField::InstrumentId => a.instrument_id.cmp(&b.instrument_id),
            SortField::InstrumentName => a.instrument_name.cmp(&b.instrument_name),
            SortField::TradeDateTime => a.trade_date_time.cmp(&b.trade_date_time),
            SortField::TradeId => a.trade_id.cmp(&b.trade_id),
            SortField::Trader => a.trader.cmp(&b.trader),
            SortField::Price => a.trade_details.price.cmp(&b.trade_details.price),
            SortField::Quantity => a.trade_details.quantity.cmp(&b.trade_details.quantity),
            SortField::BuySellIndicator => a
                .trade_details
                .buy_sell_indicator
                .cmp(&b.trade_details.buy_sell_indicator),
        }
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asset_class" | "assetClass" => Ok(SortField::AssetClass),
            "counterparty" => Ok(SortField::Counterparty),
            "instrument_id" | "instrumentId" => Ok(SortField::InstrumentId),
            "instrument_name" | "instrumentName" => Ok(SortField::InstrumentName),
            "trade_date_time" | "tradeDateTime" => Ok(SortField::TradeDateTime),
            "trade_id" | "tradeId" => Ok(SortField::TradeId),
            "trader" => Ok(SortField::Trader),
            "trade_details.price" | "price" => Ok(SortField::Price),
            "trade_details.quantity" | "quantity" => Ok(SortField::Quantity),
            "trade_details.buySellIndicator" | "buySellIndicator" | "tradeType" => {
                Ok(SortField::BuySellIndicator)
            }
            other => Err(QueryError::UnknownSortField(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
