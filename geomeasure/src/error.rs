//! Error types for the geomeasure library.

use thiserror::Error;

/// Errors that can occur when measuring between points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// Unit name outside the recognized set.
    #[error("Unknown unit: {unit:?} (expected one of meters, kilometers, miles, nauticalmiles, feet, inches, yards, centimeters, degrees, radians)")]
    UnknownUnit { unit: String },

    /// Destination projected with a negative distance.
    #[error("Invalid distance: {distance} (must be a non-negative number)")]
    InvalidDistance { distance: f64 },

    /// Nearest-point search over an empty candidate list.
    #[error("Nearest point search requires at least one candidate")]
    EmptyCandidates,

    /// Coordinate, distance or bearing that is not finite or out of range.
    #[error("Invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: f64 },

    /// GeoJSON input that does not describe points.
    #[cfg(feature = "geojson")]
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
}

/// Result type alias using [`MeasureError`].
pub type Result<T> = std::result::Result<T, MeasureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeasureError::UnknownUnit {
            unit: "lightyears".to_string(),
        };
        assert!(err.to_string().contains("lightyears"));

        let err = MeasureError::InvalidDistance { distance: -5.0 };
        assert!(err.to_string().contains("-5"));

        let err = MeasureError::InvalidArgument {
            name: "latitude",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("NaN"));

        let err = MeasureError::EmptyCandidates;
        assert!(err.to_string().contains("at least one candidate"));
    }
}
