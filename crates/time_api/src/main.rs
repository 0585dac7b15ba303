use tracing_subscriber::EnvFilter;

use time_service_api::cli::Cli;
use time_service_api::server;

/// Time Service API
///
/// Serves current time information for a requested timezone over HTTP:
/// - `GET /api/time` returns usage instructions
/// - `GET /api/time/<timezone>` returns the current time in that timezone
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the tracing subscriber, honoring RUST_LOG when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse_config();
    tracing::info!(
        "Starting Time Service API server on {}",
        config.bind_addr()
    );

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running Time Service API server: {}", e);
        return Err(e.into());
    }

    Ok(())
}
