use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use egx_pulse_backend::config::{Config, DataSource};
use egx_pulse_backend::external::exchangerate_host::LiveRatesProvider;
use egx_pulse_backend::external::mock::MockProvider;
use egx_pulse_backend::external::provider::MarketDataProvider;
use egx_pulse_backend::state::AppState;
use egx_pulse_backend::{app, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(logging::LoggingConfig::from_env());

    let config = Config::from_env().map_err(anyhow::Error::msg)?;

    let provider: Arc<dyn MarketDataProvider> = match config.data_source {
        DataSource::Mock => {
            tracing::info!("📊 Using data source: mock (synthetic market data)");
            Arc::new(MockProvider)
        }
        DataSource::Live => {
            tracing::info!(
                "📊 Using data source: live rates via {} (everything else synthetic)",
                config.rates_api_url
            );
            Arc::new(LiveRatesProvider::new(&config.rates_api_url)?)
        }
    };

    let state = AppState { provider };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 EGX Pulse backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
