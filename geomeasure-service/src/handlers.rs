//! HTTP request handlers for the measurement service.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geomeasure::{MeasureError, Point, Unit};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::units::resolve_units;

/// Default unit for distance and destination queries.
pub const DEFAULT_DISTANCE_UNIT: Unit = Unit::Meters;

/// Default unit for nearest-point searches.
pub const DEFAULT_NEAREST_UNIT: Unit = Unit::Kilometers;

/// Query parameters for endpoints that take two points.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PairQuery {
    /// Latitude of the first point in decimal degrees.
    #[serde(rename = "latA")]
    pub lat_a: f64,
    /// Longitude of the first point in decimal degrees.
    #[serde(rename = "lonA")]
    pub lon_a: f64,
    /// Latitude of the second point in decimal degrees.
    #[serde(rename = "latB")]
    pub lat_b: f64,
    /// Longitude of the second point in decimal degrees.
    #[serde(rename = "lonB")]
    pub lon_b: f64,
    /// Distance unit (distance endpoint only, default: meters).
    pub units: Option<String>,
}

impl PairQuery {
    fn points(&self) -> (Point, Point) {
        (
            Point::new(self.lat_a, self.lon_a),
            Point::new(self.lat_b, self.lon_b),
        )
    }
}

/// Query parameters for the destination endpoint.
///
/// `distance` and `bearing` are parsed by the handler so that a missing
/// value and a malformed value produce different messages.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DestinationQuery {
    /// Origin latitude in decimal degrees.
    pub lat: f64,
    /// Origin longitude in decimal degrees.
    pub lon: f64,
    /// Distance to travel, in `units`.
    pub distance: Option<String>,
    /// Initial bearing in degrees clockwise from north.
    pub bearing: Option<String>,
    /// Distance unit (default: meters).
    pub units: Option<String>,
}

/// Request body for the nearest-point endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NearestPointRequest {
    /// Reference point.
    #[serde(rename = "ref")]
    pub reference: Option<Point>,
    /// Candidate points, searched in order. `null` counts as empty.
    pub points: Option<Vec<Point>>,
    /// Distance unit (default: kilometers). `null` selects the default.
    pub units: Option<String>,
}

/// Distance response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DistanceResponse {
    /// Great-circle distance.
    pub distance: f64,
    /// Unit of `distance`.
    pub units: String,
}

/// Bearing response.
#[derive(Debug, Serialize, ToSchema)]
pub struct BearingResponse {
    /// Initial bearing in degrees, 0 to 360 exclusive.
    pub bearing: f64,
}

/// Nearest-point response.
#[derive(Debug, Serialize, ToSchema)]
pub struct NearestPointResponse {
    /// The closest candidate.
    pub point: Point,
    /// Index of the closest candidate in the request.
    pub index: usize,
    /// Distance from the reference point.
    pub distance: f64,
    /// Unit of `distance`.
    pub units: String,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Create an error response for a failed measurement.
fn error_response(operation: &'static str, e: MeasureError) -> Response {
    tracing::warn!(operation, error = %e, "Measurement failed");
    bad_request(e.to_string())
}

fn invalid_input(operation: &'static str, rejection: impl std::fmt::Display) -> Response {
    tracing::debug!(operation, rejection = %rejection, "Rejected request");
    bad_request("invalid input")
}

/// Get the great-circle distance between two points.
///
/// # Returns
///
/// - `200 OK` with the distance in the requested unit
/// - `400 Bad Request` for malformed coordinates or an unknown unit
#[utoipa::path(
    get,
    path = "/api/v1/distance",
    params(PairQuery),
    responses(
        (status = 200, description = "Distance between the points", body = DistanceResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    tag = "measurement"
)]
pub async fn get_distance(query: Result<Query<PairQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return invalid_input("distance", rejection),
    };

    let unit = match resolve_units(query.units.as_deref(), DEFAULT_DISTANCE_UNIT) {
        Ok(unit) => unit,
        Err(e) => return error_response("distance", e),
    };

    let (a, b) = query.points();
    match geomeasure::distance(a, b, unit) {
        Ok(distance) => {
            tracing::debug!(?a, ?b, distance, units = %unit, "Distance computed");
            (
                StatusCode::OK,
                Json(DistanceResponse {
                    distance,
                    units: unit.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => error_response("distance", e),
    }
}

/// Get the initial bearing from the first point to the second.
#[utoipa::path(
    get,
    path = "/api/v1/bearing",
    params(PairQuery),
    responses(
        (status = 200, description = "Initial bearing in degrees", body = BearingResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    tag = "measurement"
)]
pub async fn get_bearing(query: Result<Query<PairQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return invalid_input("bearing", rejection),
    };

    let (a, b) = query.points();
    match geomeasure::bearing(a, b) {
        Ok(bearing) => {
            tracing::debug!(?a, ?b, bearing, "Bearing computed");
            (StatusCode::OK, Json(BearingResponse { bearing })).into_response()
        }
        Err(e) => error_response("bearing", e),
    }
}

/// Get the point reached by travelling a distance along a bearing.
///
/// # Returns
///
/// - `200 OK` with the destination point
/// - `400 Bad Request` if the origin is malformed, distance or bearing is
///   missing or not a number, the distance is negative, or the unit is unknown
#[utoipa::path(
    get,
    path = "/api/v1/destination",
    params(DestinationQuery),
    responses(
        (status = 200, description = "Destination point", body = Point),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    tag = "measurement"
)]
pub async fn get_destination(query: Result<Query<DestinationQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return invalid_input("destination", rejection),
    };

    let distance = match required_number(query.distance.as_deref(), "distance") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let bearing = match required_number(query.bearing.as_deref(), "bearing") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let unit = match resolve_units(query.units.as_deref(), DEFAULT_DISTANCE_UNIT) {
        Ok(unit) => unit,
        Err(e) => return error_response("destination", e),
    };

    let origin = Point::new(query.lat, query.lon);
    match geomeasure::destination(origin, distance, bearing, unit) {
        Ok(point) => {
            tracing::debug!(?origin, distance, bearing, units = %unit, ?point, "Destination computed");
            (StatusCode::OK, Json(point)).into_response()
        }
        Err(e) => error_response("destination", e),
    }
}

/// Parse a required numeric query parameter.
fn required_number(raw: Option<&str>, name: &str) -> Result<f64, Response> {
    match raw.map(str::trim) {
        None | Some("") => Err(bad_request(format!("{} can't be empty", name))),
        Some(value) => value
            .parse()
            .map_err(|_| bad_request(format!("invalid {}", name))),
    }
}

/// Get the great-circle midpoint of two points.
#[utoipa::path(
    get,
    path = "/api/v1/midpoint",
    params(PairQuery),
    responses(
        (status = 200, description = "Midpoint", body = Point),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    tag = "measurement"
)]
pub async fn get_midpoint(query: Result<Query<PairQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return invalid_input("midpoint", rejection),
    };

    let (a, b) = query.points();
    match geomeasure::midpoint(a, b) {
        Ok(point) => (StatusCode::OK, Json(point)).into_response(),
        Err(e) => error_response("midpoint", e),
    }
}

/// Find the candidate closest to a reference point.
///
/// Ties go to the candidate listed first.
#[utoipa::path(
    post,
    path = "/api/v1/nearestpoint",
    request_body = NearestPointRequest,
    responses(
        (status = 200, description = "Closest candidate", body = NearestPointResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    tag = "measurement"
)]
pub async fn post_nearest_point(
    body: Result<Json<NearestPointRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return invalid_input("nearestpoint", rejection),
    };

    let Some(reference) = request.reference else {
        return bad_request("reference point can't be empty");
    };
    let candidates = request.points.unwrap_or_default();
    if candidates.is_empty() {
        return bad_request("points can't be empty");
    }
    let unit = match resolve_units(request.units.as_deref(), DEFAULT_NEAREST_UNIT) {
        Ok(unit) => unit,
        Err(e) => return error_response("nearestpoint", e),
    };

    match geomeasure::nearest(reference, &candidates, unit) {
        Ok(found) => {
            tracing::debug!(
                candidates = candidates.len(),
                index = found.index,
                distance = found.distance,
                "Nearest point found"
            );
            (
                StatusCode::OK,
                Json(NearestPointResponse {
                    point: found.point,
                    index: found.index,
                    distance: found.distance,
                    units: unit.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => error_response("nearestpoint", e),
    }
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
