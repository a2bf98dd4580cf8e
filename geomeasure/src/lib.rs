//! # geomeasure - Great-Circle Measurement Library
//!
//! Point-to-point measurements on a spherical Earth: distance, initial
//! bearing, destination projection, midpoint, and nearest-point search.
//!
//! ## Features
//!
//! - **Pure**: every operation is a stateless function of its arguments, safe
//!   to call from any number of threads
//! - **Antimeridian-aware**: returned longitudes are always wrapped into range
//! - **Typed units**: ten distance units, including angular degrees/radians
//! - **GeoJSON**: optional interop behind the `geojson` feature
//!
//! ## Quick Start
//!
//! ```
//! use geomeasure::{bearing, destination, distance, Point, Unit};
//!
//! let a = Point::new(20.0, 44.0);
//! let b = Point::new(21.0, 44.0);
//!
//! let meters = distance(a, b, Unit::Meters)?;
//! assert!((meters - 111_195.08).abs() < 0.01);
//! assert_eq!(bearing(a, b)?, 0.0);
//!
//! let there = destination(a, meters, 0.0, Unit::Meters)?;
//! assert!((there.lat - 21.0).abs() < 1e-9);
//! # Ok::<(), geomeasure::MeasureError>(())
//! ```
//!
//! ## Earth Model
//!
//! The Earth is a sphere with the mean radius of 6,371,008.8 m. Results differ
//! from ellipsoidal (geodesic) solutions by up to about 0.5%.

pub mod error;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod measure;
pub mod nearest;
pub mod point;
pub mod units;

// Re-export main types at crate root for convenience
pub use error::{MeasureError, Result};
pub use measure::{bearing, destination, distance, midpoint};
pub use nearest::{nearest, nearest_point, NearestMatch};
pub use point::Point;
pub use units::{Unit, EARTH_RADIUS_METERS};
