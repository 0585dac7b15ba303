//! HTTP surface for the time service.

use axum::{Json, Router, extract::Path, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::core::error::TimeServiceResult;
use crate::core::models::{TimeSnapshot, UsageResponse};
use crate::core::provider;

/// GET /api/time
///
/// Static usage instructions; performs no time computation.
async fn usage() -> Json<UsageResponse> {
    Json(UsageResponse {
        message: "This is the Time Service API.",
        usage: "Append a timezone to the URL, e.g., /api/time/UTC or /api/time/America/New_York",
    })
}

/// GET /api/time/{*timezone}
///
/// The wildcard keeps embedded `/` in the capture, so multi-segment
/// identifiers like `America/New_York` arrive intact. Always answers 200;
/// an unresolvable timezone is corrected to UTC rather than rejected.
async fn current_time(Path(timezone): Path<String>) -> Json<TimeSnapshot> {
    Json(provider::current_snapshot(&timezone))
}

/// Build the application router
pub fn router() -> Router {
    Router::new()
        .route("/api/time", get(usage))
        .route("/api/time/{*timezone}", get(current_time))
}

/// Bind the configured address and serve until the process exits
pub async fn run(config: Config) -> TimeServiceResult<()> {
    let app = router().layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
