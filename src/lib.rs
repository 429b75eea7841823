//! # collect-routing
//!
//! Collection route optimization over precomputed travel-cost matrices.
//! Given pairwise distances (metres) and durations (seconds) between a
//! depot, a set of collection points, and a terminal node, finds a
//! low-cost visiting order and reports the optimized sequence together
//! with total distance and duration.
//!
//! ## Modules
//!
//! - [`matrix`] — Cost-matrix document parsing and validation
//! - [`models`] — Route and optimization result types
//! - [`evaluation`] — Shared route-cost accounting
//! - [`progress`] — Fire-and-forget progress event sink
//! - [`ga`] — Genetic route optimizer
//! - [`search`] — Constrained-search route optimizer (cheapest arc + guided local search)
//! - [`optimizer`] — Strategy selection facade
//!
//! ## Route convention
//!
//! A route over `N` nodes is a permutation of `0..N-1` with the depot
//! fixed at position 0 and the terminal node `N-1` fixed at the last
//! position; only the interior collection points are reordered.

pub mod error;
pub mod evaluation;
pub mod ga;
pub mod matrix;
pub mod models;
pub mod optimizer;
pub mod progress;
pub mod search;

pub use error::{Error, Result};
pub use matrix::CostMatrix;
pub use models::{OptimizationResult, Route};
pub use optimizer::{optimize, Strategy};
pub use progress::{ChannelSink, NullSink, ProgressSink};
