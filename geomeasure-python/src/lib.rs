//! Python bindings for the geomeasure great-circle library.

#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

// Use fully qualified path to avoid collision with the Python module name
use ::geomeasure as geo;

fn to_py_err(err: geo::MeasureError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_unit(units: &str, default: geo::Unit) -> PyResult<geo::Unit> {
    geo::Unit::resolve(units, default).map_err(to_py_err)
}

/// A location in decimal degrees.
///
/// Example:
///     >>> Point(39.46, -75.3)
///     Point(lat=39.46, lng=-75.3)
#[pyclass]
#[derive(Clone, Copy)]
struct Point {
    /// Latitude in decimal degrees.
    #[pyo3(get)]
    lat: f64,
    /// Longitude in decimal degrees.
    #[pyo3(get)]
    lng: f64,
}

#[pymethods]
impl Point {
    #[new]
    fn new(lat: f64, lng: f64) -> Self {
        Point { lat, lng }
    }

    fn __repr__(&self) -> String {
        format!("Point(lat={}, lng={})", self.lat, self.lng)
    }

    fn __eq__(&self, other: &Point) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl From<Point> for geo::Point {
    fn from(point: Point) -> Self {
        geo::Point::new(point.lat, point.lng)
    }
}

impl From<geo::Point> for Point {
    fn from(point: geo::Point) -> Self {
        Point {
            lat: point.lat,
            lng: point.lng,
        }
    }
}

/// Great-circle distance between two points.
///
/// Args:
///     a: First point.
///     b: Second point.
///     units: Unit name (default: "meters"; empty string also means meters).
///
/// Raises:
///     ValueError: On an unknown unit or invalid coordinates.
#[pyfunction]
#[pyo3(signature = (a, b, units="meters"))]
fn distance(a: Point, b: Point, units: &str) -> PyResult<f64> {
    let unit = parse_unit(units, geo::Unit::Meters)?;
    geo::distance(a.into(), b.into(), unit).map_err(to_py_err)
}

/// Initial bearing from `a` toward `b`, in degrees within [0, 360).
#[pyfunction]
fn bearing(a: Point, b: Point) -> PyResult<f64> {
    geo::bearing(a.into(), b.into()).map_err(to_py_err)
}

/// Point reached by travelling `distance` from `origin` along `bearing`.
///
/// Raises:
///     ValueError: On a negative distance, an unknown unit or invalid input.
#[pyfunction]
#[pyo3(signature = (origin, distance, bearing, units="meters"))]
fn destination(origin: Point, distance: f64, bearing: f64, units: &str) -> PyResult<Point> {
    let unit = parse_unit(units, geo::Unit::Meters)?;
    geo::destination(origin.into(), distance, bearing, unit)
        .map(Point::from)
        .map_err(to_py_err)
}

/// Point halfway along the great circle between `a` and `b`.
#[pyfunction]
fn midpoint(a: Point, b: Point) -> PyResult<Point> {
    geo::midpoint(a.into(), b.into())
        .map(Point::from)
        .map_err(to_py_err)
}

/// Candidate closest to `reference`.
///
/// Returns:
///     Tuple of (point, index, distance) with the distance in `units`
///     (default: "kilometers").
///
/// Raises:
///     ValueError: If `candidates` is empty or any input is invalid.
#[pyfunction]
#[pyo3(signature = (reference, candidates, units="kilometers"))]
fn nearest_point(
    reference: Point,
    candidates: Vec<Point>,
    units: &str,
) -> PyResult<(Point, usize, f64)> {
    let unit = parse_unit(units, geo::Unit::Kilometers)?;
    let candidates: Vec<geo::Point> = candidates.into_iter().map(geo::Point::from).collect();
    let found = geo::nearest(reference.into(), &candidates, unit).map_err(to_py_err)?;
    Ok((found.point.into(), found.index, found.distance))
}

/// Canonical names of the supported units.
#[pyfunction]
fn units() -> Vec<&'static str> {
    geo::Unit::ALL.iter().map(|unit| unit.name()).collect()
}

/// geomeasure - spherical-earth measurements.
///
/// Example:
///     >>> import geomeasure_py as gm
///     >>> gm.distance(gm.Point(20, 44), gm.Point(21, 44), "kilometers")
///     111.19508023353242
#[pymodule]
fn geomeasure_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Point>()?;
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(bearing, m)?)?;
    m.add_function(wrap_pyfunction!(destination, m)?)?;
    m.add_function(wrap_pyfunction!(midpoint, m)?)?;
    m.add_function(wrap_pyfunction!(nearest_point, m)?)?;
    m.add_function(wrap_pyfunction!(units, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("EARTH_RADIUS_METERS", geo::EARTH_RADIUS_METERS)?;
    Ok(())
}
