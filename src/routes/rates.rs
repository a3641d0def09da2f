use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::ExchangeRates;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_rates))
}

#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    pub base: Option<String>,
    /// Comma-separated counter-currency filter. Parsed and forwarded, but the
    /// fixed tables are small enough that no filtering happens yet.
    pub symbols: Option<String>,
}

pub async fn get_rates(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> Result<Json<ExchangeRates>, AppError> {
    let base = query.base.unwrap_or_else(|| "EGP".to_string());
    let symbols: Option<Vec<String>> = query
        .symbols
        .map(|s| s.split(',').map(|code| code.trim().to_string()).collect());
    info!("GET /api/rates - base={}", base);

    let rates = state
        .provider
        .rates(&base, symbols.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to build exchange rates for {}: {}", base, e);
            e
        })?;
    Ok(Json(rates))
}
