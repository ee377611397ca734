//! Trade store - the read-only book every query runs against
//!
//! Built once at startup and never mutated afterwards, so it can be shared
//! between request handlers without locking.

mod seed;

pub use seed::seed_trades;

use crate::types::Trade;
use chrono::{DateTime, Utc};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read trade file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid trade data in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to an ordered trade collection.
///
/// The query engine only ever sees this trait, so a persistent backend can
/// replace [`TradeStore`] without touching query semantics.
pub trait TradeProvider: Send + Sync {
    /// All trades in store order.
    fn trades(&self) -> &[Trade];
}

/// In-memory trade book
#[derive(Debug, Clone, Default)]
pub struct TradeStore {
    trades: Vec<Trade>,
}

impl TradeStore {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    /// Built-in demo book, every trade stamped with `at`
    pub fn seeded(at: DateTime<Utc>) -> Self {
        Self::new(seed_trades(at))
    }

    /// Load a JSON array of trades, keeping file order as store order
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path_str.clone(),
            source,
        })?;
        let trades: Vec<Trade> = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path_str.clone(),
            source,
        })?;

        info!("Loaded {} trades from {}", trades.len(), path_str);
        Ok(Self::new(trades))
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

impl TradeProvider for TradeStore {
    fn trades(&self) -> &[Trade] {
        &self.trades
    }
}
