//! Routing model and search parameters for the constrained-search
//! optimizer.
//!
//! The model mirrors the surface of a generic constraint-based
//! vehicle-routing solver: a node count, a single vehicle with a depot,
//! and a registered arc-cost callback. Solvers are interchangeable
//! behind the [`RouteSolver`] trait and must not assume anything about
//! each other's internals.

use std::time::Duration;

/// First-solution heuristic used to seed the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstSolutionStrategy {
    /// Greedy cheapest-arc insertion from the depot.
    #[default]
    CheapestArc,
}

/// Metaheuristic used to refine the first solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalSearchMetaheuristic {
    /// Guided local search: penalize costly arcs of each local optimum
    /// to escape it, searching on an augmented cost.
    #[default]
    GuidedLocalSearch,
}

/// Search configuration: heuristics plus a wall-clock budget.
///
/// The search is time-boxed best effort, not exact: it returns the best
/// feasible solution found within [`time_limit`](Self::time_limit).
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Heuristic producing the initial route.
    pub first_solution: FirstSolutionStrategy,
    /// Refinement metaheuristic.
    pub metaheuristic: LocalSearchMetaheuristic,
    /// Wall-clock search budget.
    pub time_limit: Duration,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            first_solution: FirstSolutionStrategy::default(),
            metaheuristic: LocalSearchMetaheuristic::default(),
            time_limit: Duration::from_secs(30),
        }
    }
}

impl SearchParams {
    /// Sets the wall-clock search budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }
}

/// A single-vehicle routing model over `size` nodes with a registered
/// arc-cost callback.
///
/// The callback must be side-effect-free with respect to the
/// optimization result and safe to call repeatedly and in any order
/// the solver chooses.
pub struct RoutingModel<'a> {
    size: usize,
    vehicles: usize,
    depot: usize,
    arc_cost: Box<dyn Fn(usize, usize) -> i64 + Send + Sync + 'a>,
}

impl<'a> RoutingModel<'a> {
    /// Creates a model with one vehicle, the depot at node 0, and the
    /// given arc-cost callback.
    pub fn new<F>(size: usize, arc_cost: F) -> Self
    where
        F: Fn(usize, usize) -> i64 + Send + Sync + 'a,
    {
        Self {
            size,
            vehicles: 1,
            depot: 0,
            arc_cost: Box::new(arc_cost),
        }
    }

    /// Evaluates the cost of traversing the arc `from → to`.
    pub fn arc_cost(&self, from: usize, to: usize) -> i64 {
        (self.arc_cost)(from, to)
    }

    /// Number of nodes in the model.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of vehicles (always 1 for this problem).
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Depot node index.
    pub fn depot(&self) -> usize {
        self.depot
    }
}

/// A search strategy over a [`RoutingModel`].
///
/// Returns the best visiting sequence found within the budget, or
/// `None` if no feasible solution was found.
pub trait RouteSolver {
    /// Runs the search against the model under the given parameters.
    fn solve(&self, model: &RoutingModel<'_>, params: &SearchParams) -> Option<Vec<usize>>;
}
