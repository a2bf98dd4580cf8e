//! Latitude/longitude points.

use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, Result};

/// A point on the Earth's surface in decimal degrees.
///
/// Serializes as `{"lat": .., "lng": ..}`. Equality is exact floating-point
/// equality; callers comparing computed points should apply a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Point {
    /// Latitude in decimal degrees (-90 to 90).
    pub lat: f64,
    /// Longitude in decimal degrees (-180 to 180).
    pub lng: f64,
}

impl Point {
    /// Create a new point from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both coordinates are finite and the latitude is within ±90°.
    ///
    /// Longitudes outside ±180° are accepted; every result produced by the
    /// engine is normalized back into range.
    ///
    /// # Examples
    ///
    /// ```
    /// use geomeasure::Point;
    ///
    /// assert!(Point::new(45.0, 190.0).validate().is_ok());
    /// assert!(Point::new(91.0, 0.0).validate().is_err());
    /// assert!(Point::new(0.0, f64::NAN).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || self.lat.abs() > 90.0 {
            return Err(MeasureError::InvalidArgument {
                name: "latitude",
                value: self.lat,
            });
        }
        if !self.lng.is_finite() {
            return Err(MeasureError::InvalidArgument {
                name: "longitude",
                value: self.lng,
            });
        }
        Ok(())
    }

    /// Whether both points name the same place on the sphere.
    ///
    /// Longitudes are compared after normalization, and every longitude at a
    /// pole is the same place.
    ///
    /// # Examples
    ///
    /// ```
    /// use geomeasure::Point;
    ///
    /// assert!(Point::new(10.0, 190.0).same_location(&Point::new(10.0, -170.0)));
    /// assert!(Point::new(90.0, 0.0).same_location(&Point::new(90.0, 50.0)));
    /// assert!(!Point::new(0.0, 0.0).same_location(&Point::new(0.0, 1.0)));
    /// ```
    pub fn same_location(&self, other: &Point) -> bool {
        if self.lat != other.lat {
            return false;
        }
        self.lat.abs() == 90.0 || normalize_longitude(self.lng) == normalize_longitude(other.lng)
    }

    /// Latitude and longitude converted to radians.
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl From<(f64, f64)> for Point {
    /// Build a point from a `(lat, lng)` tuple.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Wrap a longitude in degrees into the range [-180, 180).
///
/// # Examples
///
/// ```
/// use geomeasure::point::normalize_longitude;
///
/// assert_eq!(normalize_longitude(190.0), -170.0);
/// assert_eq!(normalize_longitude(-181.0), 179.0);
/// assert_eq!(normalize_longitude(45.0), 45.0);
/// ```
pub fn normalize_longitude(lng: f64) -> f64 {
    if (-180.0..180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}
