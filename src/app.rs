use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{convert, gold, health, news, rates, silver, stocks};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/gold", gold::router())
        .nest("/api/silver", silver::router())
        .nest("/api/stocks", stocks::router())
        .nest("/api/rates", rates::router())
        .nest("/api/convert", convert::router())
        .nest("/api/news", news::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
