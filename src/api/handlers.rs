//! API request handlers
//!
//! Raw query strings are parsed into typed criteria here; the query engine
//! only ever sees well-typed input.

use super::error::ApiError;
use crate::query::{self, SortField, TradeCriteria, DEFAULT_LIMIT};
use crate::types::BuySellIndicator;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

// ==========================================
// Request Types
// ==========================================

/// `/trades` query string, kept as raw text until validated
#[derive(Debug, Default, Deserialize)]
pub struct TradesQuery {
    pub search: Option<String>,
    #[serde(rename = "assetClass")]
    pub asset_class: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    #[serde(rename = "tradeType")]
    pub trade_type: Option<String>,
    pub skip: Option<String>,
    pub limit: Option<String>,
    #[serde(alias = "sortBy")]
    pub sort_by: Option<String>,
}

impl TryFrom<TradesQuery> for TradeCriteria {
    type Error = ApiError;

    fn try_from(q: TradesQuery) -> Result<Self, Self::Error> {
        Ok(TradeCriteria {
            search: q.search,
            asset_class: q.asset_class,
            start: q.start.as_deref().map(|s| parse_timestamp("start", s)).transpose()?,
            end: q.end.as_deref().map(|s| parse_timestamp("end", s)).transpose()?,
            min_price: q.min_price.as_deref().map(|s| parse_price("minPrice", s)).transpose()?,
            max_price: q.max_price.as_deref().map(|s| parse_price("maxPrice", s)).transpose()?,
            trade_type: q
                .trade_type
                .as_deref()
                .map(BuySellIndicator::from_str)
                .transpose()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            sort_by: q
                .sort_by
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(SortField::from_str)
                .transpose()?,
            skip: q.skip.as_deref().map(|s| parse_count("skip", s)).transpose()?.unwrap_or(0),
            limit: q
                .limit
                .as_deref()
                .map(|s| parse_count("limit", s))
                .transpose()?
                .unwrap_or(DEFAULT_LIMIT),
        })
    }
}

/// RFC 3339, or a naive date-time / date taken as UTC
fn parse_timestamp(param: &str, raw: &str) -> Result<DateTime<Utc>, ApiError> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }
    Err(ApiError::BadRequest(format!("Invalid {}: '{}' is not a valid date-time", param, raw)))
}

fn parse_price(param: &str, raw: &str) -> Result<Decimal, ApiError> {
    let s = raw.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| ApiError::BadRequest(format!("Invalid {}: '{}' is not a number", param, raw)))
}

fn parse_count(param: &str, raw: &str) -> Result<usize, ApiError> {
    raw.trim().parse::<usize>().map_err(|_| {
        ApiError::BadRequest(format!("Invalid {}: '{}' is not a non-negative integer", param, raw))
    })
}

// ==========================================
// Health
// ==========================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "trades_loaded": state.store.trades().len()
    }))
}

// ==========================================
// Trade Handlers
// ==========================================

pub async fn get_trades(
    State(state): State<Arc<AppState>>,
    params: Result<Query<TradesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let criteria = TradeCriteria::try_from(params)?;

    let page = query::list_trades(state.store.as_ref(), &criteria);
    Ok(Json(page).into_response())
}

pub async fn get_trade(
    State(state): State<Arc<AppState>>,
    Path(trade_id): Path<String>,
) -> Result<Response, ApiError> {
    match query::get_trade_by_id(state.store.as_ref(), &trade_id) {
        Some(trade) => Ok(Json(trade).into_response()),
        None => {
            debug!("Trade {} not found", trade_id);
            Err(ApiError::NotFound("Trade not found".to_string()))
        }
    }
}
