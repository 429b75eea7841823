//! Domain model types for route optimization.
//!
//! Provides the route abstraction (a fixed-endpoint permutation of
//! node indices) and the result shape shared by both optimizers.

mod result;
mod route;

pub use result::OptimizationResult;
pub use route::Route;
