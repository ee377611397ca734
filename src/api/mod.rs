//! API module - Axum HTTP server and routes

mod error;
mod handlers;

pub use error::ApiError;

use crate::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the application router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // ==========================================
        // Trades (read-only)
        // ==========================================
        .route("/trades", get(handlers::get_trades))
        .route("/trades/:trade_id", get(handlers::get_trade))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TradeStore;
    use crate::types::Trade;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(AppState::new(TradeStore::seeded(Utc::now()))))
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn instrument_ids(body: &serde_json::Value) -> Vec<String> {
        let trades: Vec<Trade> = serde_json::from_value(body.clone()).unwrap();
        trades.into_iter().map(|t| t.instrument_id).collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["trades_loaded"], 5);
    }

    #[tokio::test]
    async fn test_list_all_trades() {
        let (status, body) = get("/trades").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(instrument_ids(&body), vec!["AAPL", "TSLA", "GOOGL", "EURUSD", "AMZN"]);
    }

    #[tokio::test]
    async fn test_list_sorted_by_price() {
        let (status, body) = get("/trades?sort_by=trade_details.price").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(instrument_ids(&body), vec!["EURUSD", "AAPL", "TSLA", "GOOGL", "AMZN"]);
    }

    #[tokio::test]
    async fn test_empty_sort_by_keeps_store_order() {
        let (status, body) = get("/trades?sort_by=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(instrument_ids(&body), vec!["AAPL", "TSLA", "GOOGL", "EURUSD", "AMZN"]);
    }

    #[tokio::test]
    async fn test_list_paginated() {
        let (status, body) = get("/trades?skip=3&limit=10").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(instrument_ids(&body), vec!["EURUSD", "AMZN"]);
    }

    #[tokio::test]
    async fn test_list_filtered() {
        let (_, body) = get("/trades?search=tesla").await;
        assert_eq!(instrument_ids(&body), vec!["TSLA"]);

        let (_, body) = get("/trades?assetClass=Equity&tradeType=BUY&minPrice=150&maxPrice=2500").await;
        assert_eq!(instrument_ids(&body), vec!["GOOGL"]);

        let (_, body) = get("/trades?start=2000-01-01&end=2999-12-31T23:59:59Z").await;
        assert_eq!(instrument_ids(&body).len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_bad_request() {
        let (status, body) = get("/trades?sort_by=bogus").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Unknown sort field: bogus");
    }

    #[tokio::test]
    async fn test_malformed_number_is_bad_request() {
        let (status, _) = get("/trades?minPrice=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get("/trades?skip=-2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_trade_by_id() {
        let (status, body) = get("/trades/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["instrument_id"], "TSLA");
        assert_eq!(body["trade_details"]["buySellIndicator"], "SELL");
        assert_eq!(body["trade_details"]["price"], 500.0);
    }

    #[tokio::test]
    async fn test_get_unknown_trade_is_not_found() {
        let (status, body) = get("/trades/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Trade not found");
    }
}
