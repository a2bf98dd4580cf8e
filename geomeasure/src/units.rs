//! Distance units and conversion to and from central angles.
//!
//! Every linear distance on the sphere corresponds to a central angle in
//! radians: `length = angle × EARTH_RADIUS_METERS / meters_per_unit`.
//! Angular units (degrees and radians) describe the central angle itself and
//! are never scaled by the Earth's radius.
//!
//! # Unit Names
//!
//! | Unit | Name | Meters per unit |
//! |------|------|-----------------|
//! | [`Unit::Meters`] | `meters` | 1 |
//! | [`Unit::Kilometers`] | `kilometers` | 1000 |
//! | [`Unit::Miles`] | `miles` | 1609.344 |
//! | [`Unit::NauticalMiles`] | `nauticalmiles` | 1852 |
//! | [`Unit::Feet`] | `feet` | 0.3048 |
//! | [`Unit::Inches`] | `inches` | 0.0254 |
//! | [`Unit::Yards`] | `yards` | 0.9144 |
//! | [`Unit::Centimeters`] | `centimeters` | 0.01 |
//! | [`Unit::Degrees`] | `degrees` | angular |
//! | [`Unit::Radians`] | `radians` | angular |
//!
//! Names are matched exactly and case-sensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, Result};

/// Mean Earth radius in meters (WGS84 mean radius convention).
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// A unit in which distances are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Meters,
    Kilometers,
    Miles,
    NauticalMiles,
    Feet,
    Inches,
    Yards,
    Centimeters,
    Degrees,
    Radians,
}

impl Unit {
    /// All recognized units, in canonical order.
    pub const ALL: [Unit; 10] = [
        Unit::Meters,
        Unit::Kilometers,
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Feet,
        Unit::Inches,
        Unit::Yards,
        Unit::Centimeters,
        Unit::Degrees,
        Unit::Radians,
    ];

    /// Canonical lowercase name of the unit.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nauticalmiles",
            Unit::Feet => "feet",
            Unit::Inches => "inches",
            Unit::Yards => "yards",
            Unit::Centimeters => "centimeters",
            Unit::Degrees => "degrees",
            Unit::Radians => "radians",
        }
    }

    /// Returns true for units that measure the central angle directly.
    pub fn is_angular(&self) -> bool {
        matches!(self, Unit::Degrees | Unit::Radians)
    }

    /// Length of one unit in meters, or `None` for angular units.
    pub fn meters(&self) -> Option<f64> {
        match self {
            Unit::Meters => Some(1.0),
            Unit::Kilometers => Some(1000.0),
            Unit::Miles => Some(1609.344),
            Unit::NauticalMiles => Some(1852.0),
            Unit::Feet => Some(0.3048),
            Unit::Inches => Some(0.0254),
            Unit::Yards => Some(0.9144),
            Unit::Centimeters => Some(0.01),
            Unit::Degrees | Unit::Radians => None,
        }
    }

    /// Resolve a unit name, treating the empty string as `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geomeasure::Unit;
    ///
    /// assert_eq!(Unit::resolve("", Unit::Kilometers).unwrap(), Unit::Kilometers);
    /// assert_eq!(Unit::resolve("miles", Unit::Kilometers).unwrap(), Unit::Miles);
    /// assert!(Unit::resolve("Miles", Unit::Kilometers).is_err());
    /// ```
    pub fn resolve(name: &str, default: Unit) -> Result<Unit> {
        if name.is_empty() {
            Ok(default)
        } else {
            name.parse()
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| MeasureError::UnknownUnit {
                unit: s.to_string(),
            })
    }
}

/// Convert a central angle in radians into a distance in `unit`.
///
/// # Examples
///
/// ```
/// use geomeasure::units::{radians_to_length, EARTH_RADIUS_METERS};
/// use geomeasure::Unit;
///
/// assert_eq!(radians_to_length(1.0, Unit::Meters), EARTH_RADIUS_METERS);
/// let degrees = radians_to_length(std::f64::consts::PI, Unit::Degrees);
/// assert!((degrees - 180.0).abs() < 1e-12);
/// ```
pub fn radians_to_length(radians: f64, unit: Unit) -> f64 {
    match (unit, unit.meters()) {
        (_, Some(meters_per_unit)) => radians * EARTH_RADIUS_METERS / meters_per_unit,
        (Unit::Degrees, None) => radians.to_degrees(),
        (_, None) => radians,
    }
}

/// Convert a distance in `unit` into a central angle in radians.
pub fn length_to_radians(length: f64, unit: Unit) -> f64 {
    match (unit, unit.meters()) {
        (_, Some(meters_per_unit)) => length * meters_per_unit / EARTH_RADIUS_METERS,
        (Unit::Degrees, None) => length.to_radians(),
        (_, None) => length,
    }
}

/// Convert a distance between two units.
///
/// # Examples
///
/// ```
/// use geomeasure::units::convert_length;
/// use geomeasure::Unit;
///
/// let km = convert_length(1852.0, Unit::Meters, Unit::Kilometers);
/// assert!((km - 1.852).abs() < 1e-12);
/// ```
pub fn convert_length(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    radians_to_length(length_to_radians(value, from), to)
}
