//! Total distance and duration of a concrete visiting sequence.
//!
//! Both optimizers must agree on one cost convention: sum the pairwise
//! consecutive-node costs along the sequence (depot legs included), and
//! for duration only, add a fixed collection-time penalty once per
//! interior stop. Distance never carries the penalty.

use crate::matrix::CostMatrix;

/// Fixed time spent collecting at each interior stop, in seconds.
pub const COLLECTION_TIME_SECS: i64 = 30;

/// Total travel distance in metres of the visiting sequence `stops`.
///
/// Sums `distance[stops[i]][stops[i+1]]` over consecutive pairs.
/// Returns 0 for sequences shorter than two stops.
pub fn total_distance(stops: &[usize], matrix: &CostMatrix) -> i64 {
    stops
        .windows(2)
        .map(|leg| matrix.distance(leg[0], leg[1]))
        .sum()
}

/// Total duration in seconds of the visiting sequence `stops`,
/// including [`COLLECTION_TIME_SECS`] for every interior stop.
///
/// A trivial depot-to-terminal sequence has no interior stops and
/// therefore no collection penalty.
pub fn total_duration(stops: &[usize], matrix: &CostMatrix) -> i64 {
    let travel: i64 = stops
        .windows(2)
        .map(|leg| matrix.duration(leg[0], leg[1]))
        .sum();
    let interior = stops.len().saturating_sub(2) as i64;
    travel + COLLECTION_TIME_SECS * interior
}
