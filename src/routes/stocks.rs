use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::{StockHistory, StocksSummary, TimeRange};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/history", get(get_history))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<StocksSummary>, AppError> {
    info!("GET /api/stocks/summary - Building EGX summary");

    let summary = state.provider.stocks_summary().await.map_err(|e| {
        error!("Failed to build stocks summary: {}", e);
        e
    })?;
    Ok(Json(summary))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub symbol: Option<String>,
    pub range: Option<TimeRange>,
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<StockHistory>, AppError> {
    let symbol = query
        .symbol
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("symbol parameter is required".to_string()))?;
    let range = query.range.unwrap_or_default();
    info!("GET /api/stocks/history - symbol={} range={}", symbol, range);

    let history = state
        .provider
        .stock_history(&symbol, range)
        .await
        .map_err(|e| {
            match &e {
                AppError::NotFound(_) => warn!("Unknown stock symbol requested: {}", symbol),
                _ => error!("Failed to build history for {}: {}", symbol, e),
            }
            e
        })?;
    Ok(Json(history))
}
