//! Constrained-search route optimizer.
//!
//! - [`RoutingModel`] / [`SearchParams`] — Solver-facing model and configuration
//! - [`RouteSolver`] — Capability trait any first-solution + refinement solver satisfies
//! - [`cheapest_arc_route`] — Greedy cheapest-arc first solution
//! - [`GlsSolver`] — Time-boxed guided local search
//! - [`ConstrainedSearchOptimizer`] — Strategy entry point

mod cheapest_arc;
mod gls;
mod model;
mod optimizer;

pub use cheapest_arc::cheapest_arc_route;
pub use gls::GlsSolver;
pub use model::{FirstSolutionStrategy, LocalSearchMetaheuristic, RouteSolver, RoutingModel, SearchParams};
pub use optimizer::ConstrainedSearchOptimizer;
