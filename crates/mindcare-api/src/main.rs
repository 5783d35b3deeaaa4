use tracing_subscriber::EnvFilter;

use mindcare_api::config::ApiConfig;
use mindcare_api::state::AppState;
use mindcare_instruments::Catalog;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let catalog = Catalog::standard()?;
    tracing::info!(instruments = catalog.len(), "catalog ready");

    let app = mindcare_api::app(AppState::new(catalog, config.max_sessions));

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
