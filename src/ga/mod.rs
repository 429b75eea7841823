//! Genetic route optimizer.
//!
//! - [`GaConfig`] — Population size, operator rates, termination settings
//! - [`Population`] — Double-buffered arena of route buffers
//! - [`operators`] — Selection, crossover, and mutation over fixed-endpoint routes
//! - [`GeneticOptimizer`] — The evolutionary loop

mod config;
pub mod operators;
mod population;
mod runner;

pub use config::GaConfig;
pub use population::Population;
pub use runner::GeneticOptimizer;
