use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::NewsArticle;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_news))
}

pub async fn get_news(State(state): State<AppState>) -> Result<Json<Vec<NewsArticle>>, AppError> {
    info!("GET /api/news - Fetching news feed");

    let articles = state.provider.news().await.map_err(|e| {
        error!("Failed to fetch news: {}", e);
        e
    })?;
    Ok(Json(articles))
}
