//! geomeasure Service - HTTP microservice for great-circle measurements.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEO_API_HOST` | Listen address | 0.0.0.0:3000 |
//! | `GEO_API_REQUEST_TIMEOUT` | Per-request timeout | 5s |
//! | `GEO_API_SHUTDOWN_TIMEOUT` | Drain period after SIGINT/SIGTERM | 5s |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /api/v1/distance?latA=..&lonA=..&latB=..&lonB=..&units=..` - Great-circle distance
//! - `GET /api/v1/bearing?latA=..&lonA=..&latB=..&lonB=..` - Initial bearing
//! - `GET /api/v1/destination?lat=..&lon=..&distance=..&bearing=..&units=..` - Destination point
//! - `GET /api/v1/midpoint?latA=..&lonA=..&latB=..&lonB=..` - Midpoint
//! - `POST /api/v1/nearestpoint` - Closest of a list of candidates
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::future::IntoFuture;
use std::sync::Arc;

use geomeasure_service::ServiceConfig;
use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geomeasure_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    tracing::info!(
        host = %config.host,
        request_timeout_ms = config.request_timeout.as_millis() as u64,
        shutdown_timeout_ms = config.shutdown_timeout.as_millis() as u64,
        version = env!("CARGO_PKG_VERSION"),
        "Starting geomeasure service"
    );

    let app = geomeasure_service::router(&config);

    let listener = tokio::net::TcpListener::bind(&config.host).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    let draining = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let draining = Arc::clone(&draining);
        async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, draining connections");
            draining.notify_one();
        }
    });

    // Draining is bounded by the shutdown timeout
    let deadline = async {
        draining.notified().await;
        tokio::time::sleep(config.shutdown_timeout).await;
    };

    tokio::select! {
        result = server.into_future() => result?,
        _ = deadline => {
            tracing::warn!(
                timeout_ms = config.shutdown_timeout.as_millis() as u64,
                "Graceful shutdown did not complete in time, closing remaining connections"
            );
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
