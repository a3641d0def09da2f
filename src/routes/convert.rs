use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::ConversionResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_conversion))
}

#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn get_conversion(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConversionResult>, AppError> {
    // Amount is parsed by hand so a malformed value is a 400, not a 500.
    let amount = match query.amount {
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| AppError::Validation("invalid amount parameter".to_string()))?,
        None => 1.0,
    };
    let from = query.from.unwrap_or_else(|| "EGP".to_string());
    let to = query.to.unwrap_or_else(|| "USD".to_string());
    info!("GET /api/convert - amount={} from={} to={}", amount, from, to);

    let conversion = state
        .provider
        .convert(amount, &from, &to)
        .await
        .map_err(|e| {
            error!("Failed to convert {} -> {}: {}", from, to, e);
            e
        })?;
    Ok(Json(conversion))
}
