//! Strategy selection facade.
//!
//! Both optimizers expose the identical result contract, so callers can
//! pick a strategy per run and treat them interchangeably.

use crate::error::Result;
use crate::ga::{GaConfig, GeneticOptimizer};
use crate::matrix::CostMatrix;
use crate::models::OptimizationResult;
use crate::progress::ProgressSink;
use crate::search::{ConstrainedSearchOptimizer, SearchParams};

/// Which optimizer to run, with its configuration.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Genetic-algorithm metaheuristic.
    Genetic(GaConfig),
    /// Constrained search: cheapest-arc first solution refined by
    /// guided local search under a wall-clock budget.
    ConstrainedSearch(SearchParams),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Genetic(GaConfig::default())
    }
}

/// Runs the chosen strategy against a validated matrix.
///
/// Progress events go to `sink`, best effort. A constrained search
/// that exhausts its budget returns [`OptimizationResult::empty`];
/// matrix problems never reach this function (the loader already
/// rejected them), so errors here are internal faults only.
///
/// # Examples
///
/// ```
/// use collect_routing::{optimize, CostMatrix, NullSink, Strategy};
/// use collect_routing::ga::GaConfig;
///
/// let matrix = CostMatrix::from_slice(br#"{
///     "distances": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]],
///     "durations": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]]
/// }"#).expect("valid matrix");
///
/// let strategy = Strategy::Genetic(GaConfig::default().with_seed(42));
/// let result = optimize(&matrix, &strategy, &NullSink).expect("run succeeds");
/// assert_eq!(result.total_distance, 75);
/// ```
pub fn optimize(
    matrix: &CostMatrix,
    strategy: &Strategy,
    sink: &dyn ProgressSink,
) -> Result<OptimizationResult> {
    match strategy {
        Strategy::Genetic(config) => GeneticOptimizer::new(matrix, config.clone()).run(sink),
        Strategy::ConstrainedSearch(params) => {
            ConstrainedSearchOptimizer::new(matrix, params.clone()).run(sink)
        }
    }
}
