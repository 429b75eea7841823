//! Optimization result returned to the caller.

use super::Route;

/// The outcome of one optimization run: the optimized route plus its
/// total distance (metres) and total duration (seconds, including the
/// per-stop collection time).
///
/// The constrained-search optimizer reports an exhausted search budget
/// as [`OptimizationResult::empty`] — a distinct outcome from failure,
/// which callers must check via [`is_empty`](Self::is_empty) before
/// using the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationResult {
    /// The optimized visiting order, or `None` when no feasible
    /// solution was found within budget.
    pub route: Option<Route>,
    /// Total travel distance in metres.
    pub total_distance: i64,
    /// Total duration in seconds, collection time included.
    pub total_duration: i64,
}

impl OptimizationResult {
    /// A successful result.
    pub fn new(route: Route, total_distance: i64, total_duration: i64) -> Self {
        Self {
            route: Some(route),
            total_distance,
            total_duration,
        }
    }

    /// The explicit no-feasible-solution outcome: no route, zero
    /// distance and duration.
    pub fn empty() -> Self {
        Self {
            route: None,
            total_distance: 0,
            total_duration: 0,
        }
    }

    /// Returns `true` if the run found no feasible route.
    pub fn is_empty(&self) -> bool {
        self.route.is_none()
    }
}
