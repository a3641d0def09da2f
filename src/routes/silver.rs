use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::SilverData;
use crate::routes::gold::MetalQuery;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_silver))
}

pub async fn get_silver(
    State(state): State<AppState>,
    Query(query): Query<MetalQuery>,
) -> Result<Json<SilverData>, AppError> {
    let base = query.base.unwrap_or_default();
    let range = query.range.unwrap_or_default();
    info!("GET /api/silver - base={} range={}", base, range);

    let data = state.provider.silver(base, range).await.map_err(|e| {
        error!("Failed to build silver snapshot: {}", e);
        e
    })?;
    Ok(Json(data))
}
