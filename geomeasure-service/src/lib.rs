//! geomeasure Service Library
//!
//! HTTP handlers, configuration and router for the measurement service.
//! This library is used by both the geomeasure-service binary and integration tests.

pub mod config;
pub mod handlers;
pub mod telemetry;
pub mod units;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::ServiceConfig;
// Re-export commonly used types for convenience
pub use handlers::{
    BearingResponse, DistanceResponse, ErrorResponse, HealthResponse, NearestPointRequest,
    NearestPointResponse,
};

/// OpenAPI documentation for the measurement service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "geomeasure Service",
        version = "0.1.0",
        description = "REST API for great-circle distance, bearing, destination, midpoint and nearest-point queries.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Pedro Sanz Martinez", url = "https://github.com/pedrosanzmtz/geomeasure")
    ),
    paths(
        handlers::get_distance,
        handlers::get_bearing,
        handlers::get_destination,
        handlers::get_midpoint,
        handlers::post_nearest_point,
        handlers::health_check,
    ),
    components(
        schemas(
            geomeasure::Point,
            handlers::NearestPointRequest,
            handlers::DistanceResponse,
            handlers::BearingResponse,
            handlers::NearestPointResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "measurement", description = "Great-circle measurement endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;

/// Build the service router.
///
/// Every request is traced, counted for `/metrics` and bounded by
/// `config.request_timeout`.
pub fn router(config: &ServiceConfig) -> Router {
    telemetry::prometheus_handle();

    let api = Router::new()
        .route("/distance", get(handlers::get_distance))
        .route("/bearing", get(handlers::get_bearing))
        .route("/destination", get(handlers::get_destination))
        .route("/midpoint", get(handlers::get_midpoint))
        .route("/nearestpoint", post(handlers::post_nearest_point));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api)
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(telemetry::metrics_handler))
        .layer(middleware::from_fn(telemetry::track_requests))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.request_timeout))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}
