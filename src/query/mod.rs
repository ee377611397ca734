//! Query engine - filter, sort and paginate the trade book
//!
//! Pure functions over a [`TradeProvider`]; nothing here blocks or mutates.

mod criteria;

pub use criteria::{QueryError, SortField, TradeCriteria, DEFAULT_LIMIT};

use crate::store::TradeProvider;
use crate::types::Trade;
use tracing::debug;

/// One page of trades matching `criteria`.
///
/// Filters apply first, then a stable ascending sort, then `skip`/`limit`.
pub fn list_trades<'a>(provider: &'a dyn TradeProvider, criteria: &TradeCriteria) -> Vec<&'a Trade> {
    let mut matched: Vec<&Trade> = provider
        .trades()
        .iter()
        .filter(|trade| criteria.matches(trade))
        .collect();
    let total = matched.len();

    if let Some(field) = criteria.sort_by {
        matched.sort_by(|a, b| field.compare(a, b));
    }

    let page: Vec<&Trade> = matched
        .into_iter()
        .skip(criteria.skip)
        .take(criteria.limit)
        .collect();

    debug!(
        "list_trades: {} matched, returning {} (skip={}, limit={}, sort_by={:?})",
        total,
        page.len(),
        criteria.skip,
        criteria.limit,
        criteria.sort_by.map(|f| f.to_string())
    );
    page
}

/// First trade in store order carrying `trade_id`
pub fn get_trade_by_id<'a>(provider: &'a dyn TradeProvider, trade_id: &str) -> Option<&'a Trade> {
    provider
        .trades()
        .iter()
        .find(|trade| trade.trade_id.as_deref() == Some(trade_id))
}
