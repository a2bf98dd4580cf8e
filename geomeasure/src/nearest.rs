//! Nearest-point search by linear scan.
//!
//! Candidate lists are expected to be small (a typical request payload), so
//! every candidate is measured in input order without any spatial index.

use crate::error::{MeasureError, Result};
use crate::measure::distance;
use crate::point::Point;
use crate::units::Unit;

/// The winning candidate of a nearest-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch {
    /// The candidate closest to the reference point.
    pub point: Point,
    /// Position of `point` in the candidate list.
    pub index: usize,
    /// Great-circle distance from the reference point, in the search unit.
    pub distance: f64,
}

/// Find the candidate closest to `reference`, with its index and distance.
///
/// Ties go to the candidate that appears first in `candidates`.
///
/// # Examples
///
/// ```
/// use geomeasure::{nearest, Point, Unit};
///
/// let reference = Point::new(0.0, 0.0);
/// let candidates = [Point::new(0.0, 2.0), Point::new(0.0, 1.0), Point::new(0.0, -1.0)];
///
/// let found = nearest(reference, &candidates, Unit::Kilometers).unwrap();
/// assert_eq!(found.index, 1);
/// assert_eq!(found.point, Point::new(0.0, 1.0));
/// ```
///
/// # Errors
///
/// - [`MeasureError::EmptyCandidates`] if `candidates` is empty
/// - [`MeasureError::InvalidArgument`] if the reference or any candidate is invalid
pub fn nearest(reference: Point, candidates: &[Point], unit: Unit) -> Result<NearestMatch> {
    let (first, rest) = candidates
        .split_first()
        .ok_or(MeasureError::EmptyCandidates)?;

    let mut best = NearestMatch {
        point: *first,
        index: 0,
        distance: distance(reference, *first, unit)?,
    };

    for (offset, candidate) in rest.iter().enumerate() {
        let d = distance(reference, *candidate, unit)?;
        if d < best.distance {
            best = NearestMatch {
                point: *candidate,
                index: offset + 1,
                distance: d,
            };
        }
    }

    Ok(best)
}

/// Return the candidate closest to `reference`.
///
/// Shorthand for [`nearest`] when only the point is needed.
pub fn nearest_point(reference: Point, candidates: &[Point], unit: Unit) -> Result<Point> {
    nearest(reference, candidates, unit).map(|found| found.point)
}
