//! Built-in demo trades

use crate::types::{BuySellIndicator, Trade, TradeDetails};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[allow(clippy::too_many_arguments)]
fn trade(
    trade_id: &str,
    asset_class: &str,
    counterparty: Option<&str>,
    instrument_id: &str,
    instrument_name: &str,
    side: BuySellIndicator,
    price: Decimal,
    quantity: u64,
    trader: &str,
    at: DateTime<Utc>,
) -> Trade {
    Trade {
        asset_class: Some(asset_class.to_string()),
        counterparty: counterparty.map(str::to_string),
        instrument_id: instrument_id.to_string(),
        instrument_name: instrument_name.to_string(),
        trade_date_time: at,
        trade_details: TradeDetails {
            buy_sell_indicator: side,
            price,
            quantity,
        },
        trade_id: Some(trade_id.to_string()),
        trader: trader.to_string(),
    }
}

/// The five demo trades, in store order
pub fn seed_trades(at: DateTime<Utc>) -> Vec<Trade> {
    use BuySellIndicator::{Buy, Sell};

    vec![
        trade("1", "Equity", Some("ABC Corp"), "AAPL", "Apple Inc", Buy, Decimal::new(1000, 1), 10, "Mohan Raj", at),
        trade("2", "Bond", Some("XYZ Bank"), "TSLA", "Tesla Inc", Sell, Decimal::new(5000, 1), 5, "Roy Smith", at),
        trade("3", "Equity", Some("DEF Corp"), "GOOGL", "Alphabet Inc", Buy, Decimal::new(20000, 1), 2, "Patt Johnson", at),
        // No counterparty on record for the FX ticket
        trade("4", "FX", None, "EURUSD", "Euro/US Dollar", Sell, Decimal::new(12, 1), 10000, "Raj Anand", at),
        trade("5", "Equity", Some("GHI Bank"), "AMZN", "Amazon.com Inc", Buy, Decimal::new(30000, 1), 3, "Sam Wilson", at),
    ]
}
