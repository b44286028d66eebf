use homesense_service::config::HomesenseConfig;
use homesense_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HomesenseConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("homesense-service", "info", config.otlp_endpoint.as_deref());

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
