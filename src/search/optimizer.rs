//! Constrained-search route optimizer.
//!
//! Alternative strategy to the genetic optimizer: delegates the
//! arc-cost minimization to a [`RouteSolver`] configured with a
//! cheapest-arc first solution and guided local search under a fixed
//! wall-clock budget, then translates the solver output into the shared
//! result shape.

use crate::error::{Error, Result};
use crate::evaluation;
use crate::matrix::CostMatrix;
use crate::models::{OptimizationResult, Route};
use crate::progress::ProgressSink;

use super::gls::GlsSolver;
use super::model::{RouteSolver, RoutingModel, SearchParams};

/// Constrained-search optimizer over one immutable cost matrix.
///
/// Only the distance matrix drives the search; duration is derived from
/// the chosen route afterwards, not optimized jointly. An exhausted
/// budget yields [`OptimizationResult::empty`], not an error.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use collect_routing::matrix::CostMatrix;
/// use collect_routing::progress::NullSink;
/// use collect_routing::search::{ConstrainedSearchOptimizer, SearchParams};
///
/// let matrix = CostMatrix::from_slice(br#"{
///     "distances": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]],
///     "durations": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]]
/// }"#).expect("valid matrix");
///
/// let params = SearchParams::default().with_time_limit(Duration::from_millis(50));
/// let result = ConstrainedSearchOptimizer::new(&matrix, params)
///     .run(&NullSink)
///     .expect("optimization succeeds");
/// assert_eq!(result.total_distance, 75);
/// ```
pub struct ConstrainedSearchOptimizer<'a> {
    matrix: &'a CostMatrix,
    params: SearchParams,
}

impl<'a> ConstrainedSearchOptimizer<'a> {
    /// Creates an optimizer for the given matrix and search parameters.
    pub fn new(matrix: &'a CostMatrix, params: SearchParams) -> Self {
        Self { matrix, params }
    }

    /// Runs the default guided-local-search solver.
    pub fn run(&self, sink: &dyn ProgressSink) -> Result<OptimizationResult> {
        self.run_with_solver(&GlsSolver, sink)
    }

    /// Runs an injected solver against the routing model.
    pub fn run_with_solver<S: RouteSolver>(
        &self,
        solver: &S,
        sink: &dyn ProgressSink,
    ) -> Result<OptimizationResult> {
        let n = self.matrix.size();
        sink.publish(format!(
            "starting route optimization using constrained search ({n} points)"
        ));

        let model = RoutingModel::new(n, |from, to| {
            let distance = self.matrix.distance(from, to);
            // High-volume diagnostic; must stay off the progress sink.
            tracing::trace!(from, to, distance, "arc cost evaluated");
            distance
        });
        sink.publish("routing model created: 1 vehicle, depot at node 0".into());

        let Some(stops) = solver.solve(&model, &self.params) else {
            sink.publish("no solution found within the time budget".into());
            return Ok(OptimizationResult::empty());
        };

        for leg in stops.windows(2) {
            sink.publish(format!(
                "adding segment: node {} -> node {} ({} m, {} s)",
                leg[0],
                leg[1],
                self.matrix.distance(leg[0], leg[1]),
                self.matrix.duration(leg[0], leg[1]),
            ));
        }

        let total_distance = evaluation::total_distance(&stops, self.matrix);
        let total_duration = evaluation::total_duration(&stops, self.matrix);
        let route = Route::new(stops).ok_or_else(|| Error::Internal {
            generation: 0,
            reason: "solver produced an invalid route".into(),
        })?;

        sink.publish(format!(
            "route generated with {} points: total distance {:.2} km, total duration {total_duration} s",
            route.len(),
            total_distance as f64 / 1000.0
        ));
        tracing::debug!(total_distance, total_duration, "constrained search finished");

        Ok(OptimizationResult::new(route, total_distance, total_duration))
    }
}
