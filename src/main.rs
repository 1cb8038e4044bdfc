use std::process;

use tracing_subscriber::EnvFilter;

use convolog::api::{start_api_server, ApiContext, ApiSecret};
use convolog::config::{self, Config};
use convolog::db;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            process::exit(1);
        }
    };

    // Bootstrap the schema before accepting requests
    if let Err(e) = db::open_database(&config.database_url) {
        tracing::error!("Database initialization failed: {e}");
        process::exit(1);
    }

    let ctx = ApiContext::new(
        config.database_url.clone(),
        ApiSecret::new(config.api_token.as_str()),
    );

    let mut server = match start_api_server(ctx, config.bind_addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
}
