use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CurrencyBase, GoldData, TimeRange};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_gold))
}

#[derive(Debug, Deserialize)]
pub struct MetalQuery {
    pub base: Option<CurrencyBase>,
    pub range: Option<TimeRange>,
}

pub async fn get_gold(
    State(state): State<AppState>,
    Query(query): Query<MetalQuery>,
) -> Result<Json<GoldData>, AppError> {
    let base = query.base.unwrap_or_default();
    let range = query.range.unwrap_or_default();
    info!("GET /api/gold - base={} range={}", base, range);

    let data = state.provider.gold(base, range).await.map_err(|e| {
        error!("Failed to build gold snapshot: {}", e);
        e
    })?;
    Ok(Json(data))
}
