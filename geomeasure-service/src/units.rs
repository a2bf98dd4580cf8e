//! Unit names accepted by the HTTP API.
//!
//! The API accepts short and British spellings on top of the canonical names
//! understood by [`geomeasure::Unit`].

use geomeasure::{MeasureError, Unit};

/// Map an API unit alias to its canonical name.
///
/// Unrecognized input is returned unchanged so that the core reports it.
pub fn canonical_unit_name(raw: &str) -> &str {
    match raw {
        "m" | "metres" => "meters",
        "km" | "kilometres" => "kilometers",
        "mi" => "miles",
        "nmi" => "nauticalmiles",
        "ft" => "feet",
        "in" => "inches",
        "yd" => "yards",
        "cm" | "centimetres" => "centimeters",
        "deg" => "degrees",
        "rad" => "radians",
        other => other,
    }
}

/// Resolve an optional `units` parameter, falling back to `default` when it
/// is missing or empty.
pub fn resolve_units(raw: Option<&str>, default: Unit) -> Result<Unit, MeasureError> {
    Unit::resolve(canonical_unit_name(raw.unwrap_or("")), default)
}
