use std::sync::Arc;

use crate::external::provider::MarketDataProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
}
