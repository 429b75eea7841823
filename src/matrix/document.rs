//! Serialized form of the cost-matrix document.

use serde::Deserialize;

use crate::error::{Error, Result};

/// The raw cost-matrix document as produced by the upstream mapping
/// service: two parallel grids of fractional network-routing estimates.
///
/// Cells are fractional in the document; [`CostMatrix`](super::CostMatrix)
/// rounds them to integer metres/seconds during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixDocument {
    /// Pairwise travel distances in metres.
    pub distances: Vec<Vec<f64>>,
    /// Pairwise travel durations in seconds.
    pub durations: Vec<Vec<f64>>,
}

impl MatrixDocument {
    /// Parses a document from raw JSON bytes.
    ///
    /// Any parse failure (syntax error, missing field, non-numeric
    /// cell) is a [`Error::MalformedMatrix`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::MalformedMatrix(e.to_string()))
    }

    /// Parses a document from a reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::MalformedMatrix(e.to_string()))
    }
}
