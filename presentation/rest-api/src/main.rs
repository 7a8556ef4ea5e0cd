use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Product catalog REST API
///
/// - config/: environment driven settings (server, CORS, catalog file, API token)
/// - setup/: dependency wiring and HTTP server
/// - api/: routes, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG from .env applies
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Seed the catalog and wire dependencies
    let container = DependencyContainer::new(&config.storage).await?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
