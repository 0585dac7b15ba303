use clap::Parser;

use crate::config::Config;

/// Time Service API Server
///
/// An HTTP server providing current time information for any IANA timezone.
///
/// ## Routes
/// - `GET /api/time`: Usage instructions
/// - `GET /api/time/<timezone>`: Current time in the given timezone,
///   e.g. `/api/time/UTC` or `/api/time/America/New_York`
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "time-service-api")]
#[command(about = "An HTTP API serving current time information for any IANA timezone")]
#[command(version)]
pub struct Cli {
    /// Host address to bind the server to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        let cli = Self::parse();
        Config {
            host: cli.host,
            port: cli.port,
        }
    }
}
