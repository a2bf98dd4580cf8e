//! Great-circle measurements on a spherical Earth.
//!
//! All functions take coordinates in degrees, work in radians internally, and
//! return degrees. The Earth is modelled as a sphere of radius
//! [`EARTH_RADIUS_METERS`](crate::units::EARTH_RADIUS_METERS).
//!
//! # Degenerate inputs
//!
//! - Coincident points (see [`Point::same_location`]): [`bearing`] returns
//!   `0.0` and [`midpoint`] returns the first point with its longitude
//!   normalized.
//! - Antipodal points: bearing and midpoint are not unique. Both functions
//!   return whatever the closed-form formula yields for the given input; the
//!   result is deterministic but carries no geometric meaning.

use crate::error::{MeasureError, Result};
use crate::point::{normalize_longitude, Point};
use crate::units::{length_to_radians, radians_to_length, Unit};

/// Central angle between two points in radians, via the haversine formula.
pub(crate) fn central_angle(from: Point, to: Point) -> f64 {
    let (lat1, lng1) = from.to_radians();
    let (lat2, lng2) = to.to_radians();

    let half_dlat = ((lat2 - lat1) / 2.0).sin();
    let half_dlng = ((lng2 - lng1) / 2.0).sin();
    let h = half_dlat * half_dlat + lat1.cos() * lat2.cos() * half_dlng * half_dlng;

    // Rounding can push h marginally above 1 for near-antipodal points
    2.0 * h.sqrt().min(1.0).asin()
}

/// Great-circle distance between two points in the requested unit.
///
/// The result is symmetric in its arguments and exactly `0.0` for identical
/// points.
///
/// # Examples
///
/// ```
/// use geomeasure::{distance, Point, Unit};
///
/// let a = Point::new(20.0, 44.0);
/// let b = Point::new(21.0, 44.0);
/// let meters = distance(a, b, Unit::Meters).unwrap();
/// assert!((meters - 111_195.08).abs() < 0.01);
/// ```
///
/// # Errors
///
/// Returns [`MeasureError::InvalidArgument`] if either point has a non-finite
/// coordinate or a latitude beyond ±90°.
pub fn distance(from: Point, to: Point, unit: Unit) -> Result<f64> {
    from.validate()?;
    to.validate()?;
    Ok(radians_to_length(central_angle(from, to), unit))
}

/// Initial compass bearing from `from` to `to`, in degrees within [0, 360).
///
/// The bearing is measured clockwise from true north at `from` and describes
/// the start of the great-circle path; it changes along the way.
///
/// # Examples
///
/// ```
/// use geomeasure::{bearing, Point};
///
/// let due_north = bearing(Point::new(20.0, 44.0), Point::new(21.0, 44.0)).unwrap();
/// assert_eq!(due_north, 0.0);
/// ```
pub fn bearing(from: Point, to: Point) -> Result<f64> {
    from.validate()?;
    to.validate()?;

    if from.same_location(&to) {
        return Ok(0.0);
    }

    let (lat1, lng1) = from.to_radians();
    let (lat2, lng2) = to.to_radians();
    let dlng = lng2 - lng1;

    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();

    Ok((y.atan2(x).to_degrees() + 360.0) % 360.0)
}

/// Project a point `distance` units away from `origin` along `bearing`.
///
/// The bearing is in degrees clockwise from north and may be any finite value;
/// it is reduced modulo 360 first. The returned longitude is wrapped into
/// [-180, 180), so paths crossing the antimeridian land on the correct side.
///
/// # Examples
///
/// ```
/// use geomeasure::{destination, Point, Unit};
///
/// let east = destination(Point::new(0.0, 179.5), 1.0, 90.0, Unit::Degrees).unwrap();
/// assert!((east.lng - -179.5).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// - [`MeasureError::InvalidDistance`] if `distance` is negative
/// - [`MeasureError::InvalidArgument`] for non-finite distance or bearing, or
///   an invalid origin
pub fn destination(origin: Point, distance: f64, bearing: f64, unit: Unit) -> Result<Point> {
    origin.validate()?;
    if !distance.is_finite() {
        return Err(MeasureError::InvalidArgument {
            name: "distance",
            value: distance,
        });
    }
    if distance < 0.0 {
        return Err(MeasureError::InvalidDistance { distance });
    }
    if !bearing.is_finite() {
        return Err(MeasureError::InvalidArgument {
            name: "bearing",
            value: bearing,
        });
    }

    let (lat1, lng1) = origin.to_radians();
    let delta = length_to_radians(distance, unit);
    let theta = bearing.rem_euclid(360.0).to_radians();

    let sin_lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos())
        .clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lng2 = lng1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

    Ok(Point::new(
        lat2.to_degrees(),
        normalize_longitude(lng2.to_degrees()),
    ))
}

/// Point halfway along the great-circle path between `a` and `b`.
///
/// # Examples
///
/// ```
/// use geomeasure::{midpoint, Point};
///
/// let mid = midpoint(Point::new(0.0, 0.0), Point::new(0.0, 90.0)).unwrap();
/// assert!(mid.lat.abs() < 1e-9);
/// assert!((mid.lng - 45.0).abs() < 1e-9);
/// ```
pub fn midpoint(a: Point, b: Point) -> Result<Point> {
    a.validate()?;
    b.validate()?;

    if a.same_location(&b) {
        return Ok(Point::new(a.lat, normalize_longitude(a.lng)));
    }

    let (lat1, lng1) = a.to_radians();
    let (lat2, lng2) = b.to_radians();
    let dlng = lng2 - lng1;

    let bx = lat2.cos() * dlng.cos();
    let by = lat2.cos() * dlng.sin();
    let cos_lat1_bx = lat1.cos() + bx;

    let lat = (lat1.sin() + lat2.sin()).atan2((cos_lat1_bx * cos_lat1_bx + by * by).sqrt());
    let lng = lng1 + by.atan2(cos_lat1_bx);

    Ok(Point::new(
        lat.to_degrees(),
        normalize_longitude(lng.to_degrees()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_point_close(actual: Point, expected: Point, tolerance: f64) {
        assert_close(actual.lat, expected.lat, tolerance);
        // -180 and 180 are the same meridian
        let dlng = (actual.lng - expected.lng).rem_euclid(360.0);
        assert!(
            dlng.min(360.0 - dlng) <= tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    }

    const SAMPLES: [Point; 8] = [
        Point::new(20.0, 44.0),
        Point::new(21.0, 44.0),
        Point::new(-33.8688, 151.2093),
        Point::new(51.5074, -0.1278),
        Point::new(89.9, 10.0),
        Point::new(-45.0, -179.9),
        Point::new(0.0, 179.9),
        Point::new(39.5, -75.33),
    ];

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let d = distance(Point::new(20.0, 44.0), Point::new(21.0, 44.0), Unit::Meters).unwrap();
        assert_close(d, 111_195.08, 0.01);

        let km = distance(
            Point::new(20.0, 44.0),
            Point::new(21.0, 44.0),
            Unit::Kilometers,
        )
        .unwrap();
        assert_close(km, 111.19508, 1e-5);
    }

    #[test]
    fn test_distance_is_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                for unit in Unit::ALL {
                    assert_eq!(
                        distance(a, b, unit).unwrap(),
                        distance(b, a, unit).unwrap(),
                        "{a:?} -> {b:?} in {unit}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_distance_identity_is_zero() {
        for a in SAMPLES {
            for unit in Unit::ALL {
                assert_eq!(distance(a, a, unit).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_distance_in_angular_units() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 90.0);
        assert_close(distance(a, b, Unit::Degrees).unwrap(), 90.0, 1e-9);
        assert_close(
            distance(a, b, Unit::Radians).unwrap(),
            std::f64::consts::FRAC_PI_2,
            1e-12,
        );
    }

    #[test]
    fn test_distance_across_antimeridian() {
        let d = distance(Point::new(0.0, 179.5), Point::new(0.0, -179.5), Unit::Degrees).unwrap();
        assert_close(d, 1.0, 1e-9);
    }

    #[test]
    fn test_distance_antipodal() {
        let d = distance(Point::new(0.0, 0.0), Point::new(0.0, 180.0), Unit::Radians).unwrap();
        assert_close(d, std::f64::consts::PI, 1e-12);
        assert!(!d.is_nan());
    }

    #[test]
    fn test_distance_rejects_invalid_points() {
        let result = distance(Point::new(f64::NAN, 0.0), Point::new(0.0, 0.0), Unit::Meters);
        assert!(matches!(
            result,
            Err(MeasureError::InvalidArgument {
                name: "latitude",
                ..
            })
        ));
        assert!(distance(Point::new(0.0, 0.0), Point::new(95.0, 0.0), Unit::Meters).is_err());
    }

    #[test]
    fn test_bearing_due_north() {
        let b = bearing(Point::new(20.0, 44.0), Point::new(21.0, 44.0)).unwrap();
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_bearing_north_west() {
        let b = bearing(Point::new(20.5, 44.5), Point::new(21.0, 44.0)).unwrap();
        assert_close(b, 317.00810984889324, 1e-9);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        assert_close(bearing(origin, Point::new(0.0, 1.0)).unwrap(), 90.0, 1e-9);
        assert_close(bearing(origin, Point::new(-1.0, 0.0)).unwrap(), 180.0, 1e-9);
        assert_close(bearing(origin, Point::new(0.0, -1.0)).unwrap(), 270.0, 1e-9);
    }

    #[test]
    fn test_bearing_across_antimeridian() {
        let b = bearing(Point::new(0.0, 179.5), Point::new(0.0, -179.5)).unwrap();
        assert_close(b, 90.0, 1e-9);
    }

    #[test]
    fn test_bearing_range() {
        for a in SAMPLES {
            for b in SAMPLES {
                let value = bearing(a, b).unwrap();
                assert!((0.0..360.0).contains(&value), "{a:?} -> {b:?} = {value}");
            }
        }
    }

    #[test]
    fn test_bearing_coincident_points() {
        for a in SAMPLES {
            assert_eq!(bearing(a, a).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_bearing_same_location_different_coordinates() {
        assert_eq!(
            bearing(Point::new(90.0, 0.0), Point::new(90.0, 50.0)).unwrap(),
            0.0
        );
        assert_eq!(
            bearing(Point::new(-90.0, 120.0), Point::new(-90.0, -3.0)).unwrap(),
            0.0
        );
        assert_eq!(
            bearing(Point::new(10.0, 190.0), Point::new(10.0, -170.0)).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_bearing_not_symmetric() {
        let a = Point::new(51.5074, -0.1278);
        let b = Point::new(40.7128, -74.006);
        let forward = bearing(a, b).unwrap();
        let back = bearing(b, a).unwrap();
        assert!((forward - back).abs() > 1.0);
        assert!((forward - back).abs() != 180.0);
    }

    #[test]
    fn test_destination_north_by_one_degree() {
        let dest = destination(Point::new(0.0, 0.0), 1.0, 0.0, Unit::Degrees).unwrap();
        assert_point_close(dest, Point::new(1.0, 0.0), 1e-9);
    }

    #[test]
    fn test_destination_meters() {
        let dest = destination(Point::new(20.0, 44.0), 111_195.08, 0.0, Unit::Meters).unwrap();
        assert_point_close(dest, Point::new(21.0, 44.0), 1e-6);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let east = destination(Point::new(0.0, 179.5), 1.0, 90.0, Unit::Degrees).unwrap();
        assert_point_close(east, Point::new(0.0, -179.5), 1e-9);

        let west = destination(Point::new(0.0, -179.5), 1.0, 270.0, Unit::Degrees).unwrap();
        assert_point_close(west, Point::new(0.0, 179.5), 1e-9);
    }

    #[test]
    fn test_destination_normalizes_bearing() {
        let origin = Point::new(10.0, 10.0);
        let plain = destination(origin, 500.0, 45.0, Unit::Kilometers).unwrap();
        let wrapped = destination(origin, 500.0, 405.0, Unit::Kilometers).unwrap();
        let negative = destination(origin, 500.0, -315.0, Unit::Kilometers).unwrap();
        assert_point_close(wrapped, plain, 1e-9);
        assert_point_close(negative, plain, 1e-9);
    }

    #[test]
    fn test_destination_zero_distance() {
        let origin = Point::new(-33.8688, 151.2093);
        let dest = destination(origin, 0.0, 123.0, Unit::Miles).unwrap();
        assert_point_close(dest, origin, 1e-12);
    }

    #[test]
    fn test_destination_over_the_pole() {
        let dest = destination(Point::new(89.0, 0.0), 2.0, 0.0, Unit::Degrees).unwrap();
        assert_point_close(dest, Point::new(89.0, -180.0), 1e-9);
    }

    #[test]
    fn test_destination_round_trip() {
        let cases = [
            (Point::new(20.0, 44.0), 1500.0, 33.0, Unit::Meters),
            (Point::new(-33.8688, 151.2093), 2000.0, 275.5, Unit::Kilometers),
            (Point::new(51.5074, -0.1278), 3459.0, 288.0, Unit::Miles),
            (Point::new(0.0, 179.9), 120.0, 91.0, Unit::NauticalMiles),
            (Point::new(60.0, -20.0), 1_000_000.0, 180.0, Unit::Feet),
            (Point::new(-10.0, 5.0), 42.0, 10.0, Unit::Degrees),
            (Point::new(45.0, 45.0), 1.25, 350.0, Unit::Radians),
        ];

        for (origin, d, theta, unit) in cases {
            let dest = destination(origin, d, theta, unit).unwrap();
            let back = distance(origin, dest, unit).unwrap();
            assert!(
                ((back - d) / d).abs() < 1e-6,
                "{origin:?} {d} {unit} -> {dest:?}, measured {back}"
            );
        }
    }

    #[test]
    fn test_destination_errors() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(
            destination(origin, -1.0, 0.0, Unit::Meters),
            Err(MeasureError::InvalidDistance { distance: -1.0 })
        );
        assert!(matches!(
            destination(origin, f64::NAN, 0.0, Unit::Meters),
            Err(MeasureError::InvalidArgument {
                name: "distance",
                ..
            })
        ));
        assert!(matches!(
            destination(origin, 1.0, f64::INFINITY, Unit::Meters),
            Err(MeasureError::InvalidArgument { name: "bearing", .. })
        ));
    }

    #[test]
    fn test_midpoint_on_equator() {
        let mid = midpoint(Point::new(0.0, 0.0), Point::new(0.0, 90.0)).unwrap();
        assert_point_close(mid, Point::new(0.0, 45.0), 1e-9);
    }

    #[test]
    fn test_midpoint_short_segment() {
        let mid = midpoint(Point::new(23.33, 34.44), Point::new(23.44, 34.42)).unwrap();
        assert_point_close(mid, Point::new(23.38500031791607, 34.430004151010706), 1e-7);
    }

    #[test]
    fn test_midpoint_is_equidistant() {
        let a = Point::new(51.5074, -0.1278);
        let b = Point::new(40.7128, -74.006);
        let mid = midpoint(a, b).unwrap();
        let da = distance(a, mid, Unit::Meters).unwrap();
        let db = distance(b, mid, Unit::Meters).unwrap();
        assert_close(da, db, 1e-3);
    }

    #[test]
    fn test_midpoint_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                let ab = midpoint(a, b).unwrap();
                let ba = midpoint(b, a).unwrap();
                assert_point_close(ab, ba, 1e-9);
            }
        }
    }

    #[test]
    fn test_midpoint_across_antimeridian() {
        let mid = midpoint(Point::new(0.0, 179.0), Point::new(0.0, -179.0)).unwrap();
        assert_close(mid.lat, 0.0, 1e-9);
        assert_close(mid.lng.abs(), 180.0, 1e-9);
    }

    #[test]
    fn test_midpoint_coincident() {
        let a = Point::new(12.5, 190.0);
        assert_eq!(midpoint(a, a).unwrap(), Point::new(12.5, -170.0));
    }

    #[test]
    fn test_midpoint_same_location_different_coordinates() {
        let mid = midpoint(Point::new(10.0, 190.0), Point::new(10.0, -170.0)).unwrap();
        assert_eq!(mid, Point::new(10.0, -170.0));

        let mid = midpoint(Point::new(90.0, 0.0), Point::new(90.0, 50.0)).unwrap();
        assert_eq!(mid, Point::new(90.0, 0.0));
    }
}
