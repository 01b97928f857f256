// Knowledge Search Gateway Entry Point
// Serves keyword search over the entries of the upstream knowledge service
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use knowledge_search_gateway::{
    api, GatewayConfig, KnowledgeServiceClient, LogFormat, SearchManager,
};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenv::dotenv().ok();
    let config = GatewayConfig::from_env()?;

    init_tracing(config.log_format);
    info!("Starting Knowledge Search Gateway");

    let client = KnowledgeServiceClient::from_config(&config)?;
    info!(
        upstream = client.base_url(),
        timeout_secs = config.request_timeout_secs,
        tls_verify = config.tls_verify,
        "Knowledge service client ready"
    );

    let manager = web::Data::new(SearchManager::new(Arc::new(client)));
    let origins = config.cors_allowed_origins.clone();

    info!("🚀 Listening on http://{}:{}", config.host, config.service_port);

    HttpServer::new(move || {
        App::new()
            .wrap(api::cors(&origins))
            .wrap(TracingLogger::default())
            .app_data(manager.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.service_port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.service_port))?
    .run()
    .await
    .context("HTTP server failed")?;

    info!("Knowledge Search Gateway stopped");
    Ok(())
}
