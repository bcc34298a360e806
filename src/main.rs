//! GroundPass server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use groundpass::adapters::http::{api_router, AppState};
use groundpass::adapters::payment::HttpPaymentGateway;
use groundpass::adapters::store::store_from_config;
use groundpass::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    if !config.payment.is_configured() {
        tracing::warn!("payment gateway credentials are not set; payment endpoints will reject requests");
    }

    let store = store_from_config(&config.storage)?;
    let payment = Arc::new(HttpPaymentGateway::new(
        config.payment.api_url.clone(),
        config.payment.key_id.clone(),
        config.payment.key_secret.clone(),
    ));

    let app = api_router(AppState::new(store, payment));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, backend = ?config.storage.backend, "GroundPass server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
