use anyhow::Context;

use stockpulse_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    stockpulse_observability::init_with(config.log_format);

    let services = stockpulse_api::app::services::build_services(&config)
        .context("failed to initialise catalog")?;
    let app = stockpulse_api::app::build_app(services, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        window = config.forecast.window,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
