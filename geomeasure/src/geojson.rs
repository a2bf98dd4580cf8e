//! GeoJSON point interop.
//!
//! This module converts between [`Point`] and GeoJSON Point geometries, and
//! collects candidate points from GeoJSON documents for nearest-point search.
//! Enable the `geojson` feature to use this module.
//!
//! GeoJSON positions are ordered `[longitude, latitude]`; any altitude is
//! ignored.
//!
//! # Example
//!
//! ```ignore
//! use geomeasure::geojson::points_from_geojson;
//! use geomeasure::{nearest_point, Point, Unit};
//! use geojson::GeoJson;
//!
//! let doc: GeoJson = r#"{"type": "MultiPoint", "coordinates": [[-75.33, 39.44], [-75.31, 39.46]]}"#
//!     .parse()
//!     .unwrap();
//!
//! let candidates = points_from_geojson(&doc)?;
//! let closest = nearest_point(Point::new(39.5, -75.33), &candidates, Unit::Kilometers)?;
//! ```

use geojson::{GeoJson, Geometry, Value as GeoJsonValue};

use crate::error::{MeasureError, Result};
use crate::point::Point;

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::new(GeoJsonValue::Point(vec![point.lng, point.lat]))
    }
}

impl TryFrom<&Geometry> for Point {
    type Error = MeasureError;

    fn try_from(geometry: &Geometry) -> Result<Self> {
        match &geometry.value {
            GeoJsonValue::Point(position) => position_to_point(position),
            other => Err(MeasureError::InvalidGeometry {
                reason: format!("expected Point, found {}", geometry_kind(other)),
            }),
        }
    }
}

/// Collect every point in a GeoJSON document.
///
/// Accepts Point and MultiPoint geometries, bare or wrapped in a Feature or
/// FeatureCollection. Points are returned in document order.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidGeometry`] if the document contains any
/// other geometry type, a feature without geometry, or a position with fewer
/// than two elements.
pub fn points_from_geojson(geojson: &GeoJson) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    match geojson {
        GeoJson::Geometry(geometry) => collect_points(geometry, &mut points)?,
        GeoJson::Feature(feature) => {
            let geometry = feature
                .geometry
                .as_ref()
                .ok_or_else(|| MeasureError::InvalidGeometry {
                    reason: "feature has no geometry".to_string(),
                })?;
            collect_points(geometry, &mut points)?;
        }
        GeoJson::FeatureCollection(collection) => {
            for (index, feature) in collection.features.iter().enumerate() {
                let geometry =
                    feature
                        .geometry
                        .as_ref()
                        .ok_or_else(|| MeasureError::InvalidGeometry {
                            reason: format!("feature {} has no geometry", index),
                        })?;
                collect_points(geometry, &mut points)?;
            }
        }
    }
    Ok(points)
}

fn collect_points(geometry: &Geometry, points: &mut Vec<Point>) -> Result<()> {
    match &geometry.value {
        GeoJsonValue::Point(position) => points.push(position_to_point(position)?),
        GeoJsonValue::MultiPoint(positions) => {
            for position in positions {
                points.push(position_to_point(position)?);
            }
        }
        other => {
            return Err(MeasureError::InvalidGeometry {
                reason: format!("expected Point or MultiPoint, found {}", geometry_kind(other)),
            })
        }
    }
    Ok(())
}

fn geometry_kind(value: &GeoJsonValue) -> &'static str {
    match value {
        GeoJsonValue::Point(_) => "Point",
        GeoJsonValue::MultiPoint(_) => "MultiPoint",
        GeoJsonValue::LineString(_) => "LineString",
        GeoJsonValue::MultiLineString(_) => "MultiLineString",
        GeoJsonValue::Polygon(_) => "Polygon",
        GeoJsonValue::MultiPolygon(_) => "MultiPolygon",
        GeoJsonValue::GeometryCollection(_) => "GeometryCollection",
    }
}

fn position_to_point(position: &[f64]) -> Result<Point> {
    match position {
        [lng, lat, ..] => Ok(Point::new(*lat, *lng)),
        _ => Err(MeasureError::InvalidGeometry {
            reason: format!(
                "position needs longitude and latitude, got {} values",
                position.len()
            ),
        }),
    }
}
