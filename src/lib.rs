//! Trade API - read-only query service over an in-memory trade book
//!
//! The query engine in [`query`] filters, sorts and paginates any
//! [`store::TradeProvider`]; [`api`] exposes it over HTTP.

pub mod api;
pub mod config;
pub mod query;
pub mod store;
pub mod types;

use crate::store::TradeProvider;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    pub store: Arc<dyn TradeProvider>,
}

impl AppState {
    pub fn new(store: impl TradeProvider + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
