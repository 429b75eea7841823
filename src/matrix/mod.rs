//! Travel-cost matrices.
//!
//! Parses a cost-matrix document (two N×N numeric grids, `distances`
//! and `durations`) into a validated [`CostMatrix`].

mod cost;
mod document;

pub use cost::CostMatrix;
pub use document::MatrixDocument;
