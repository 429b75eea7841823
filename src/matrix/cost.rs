//! Validated dense cost matrix.

use std::path::Path;

use crate::error::{Error, Result};

use super::document::MatrixDocument;

/// A validated pair of N×N cost matrices stored in row-major order:
/// distances in metres and durations in seconds, both rounded to the
/// nearest integer.
///
/// Node 0 is the depot; node `N-1` is the terminal node. The matrix is
/// immutable for the lifetime of an optimization run.
///
/// # Examples
///
/// ```
/// use collect_routing::matrix::CostMatrix;
///
/// let doc = br#"{
///     "distances": [[0.0, 9.6], [10.4, 0.0]],
///     "durations": [[0.0, 2.0], [3.0, 0.0]]
/// }"#;
/// let m = CostMatrix::from_slice(doc).expect("valid document");
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.distance(0, 1), 10);
/// assert_eq!(m.duration(1, 0), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    distances: Vec<i64>,
    durations: Vec<i64>,
    size: usize,
}

impl CostMatrix {
    /// Validates a parsed document and builds the matrix pair.
    ///
    /// Validation order:
    /// 1. zero `distances` rows → [`Error::EmptyMatrix`]
    /// 2. row count != column count, or a ragged row →
    ///    [`Error::NonSquareMatrix`]
    /// 3. fewer than two nodes, `durations` shape differing from
    ///    `distances`, or a negative cell → [`Error::MalformedMatrix`]
    ///
    /// Each cell is rounded to the nearest integer.
    pub fn from_document(doc: &MatrixDocument) -> Result<Self> {
        let rows = doc.distances.len();
        if rows == 0 {
            return Err(Error::EmptyMatrix);
        }

        let cols = doc.distances[0].len();
        if rows != cols {
            return Err(Error::NonSquareMatrix { rows, cols });
        }
        for row in &doc.distances {
            if row.len() != cols {
                return Err(Error::NonSquareMatrix {
                    rows,
                    cols: row.len(),
                });
            }
        }

        if rows < 2 {
            return Err(Error::MalformedMatrix(
                "matrix must cover at least a depot and a terminal node".into(),
            ));
        }

        if doc.durations.len() != rows || doc.durations.iter().any(|r| r.len() != cols) {
            return Err(Error::MalformedMatrix(
                "durations shape does not match distances".into(),
            ));
        }

        let distances = round_grid(&doc.distances, "distances")?;
        let durations = round_grid(&doc.durations, "durations")?;

        tracing::debug!(rows, "cost matrix loaded");

        Ok(Self {
            distances,
            durations,
            size: rows,
        })
    }

    /// Parses and validates a document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_document(&MatrixDocument::from_slice(bytes)?)
    }

    /// Parses and validates a document from a reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Self::from_document(&MatrixDocument::from_reader(reader)?)
    }

    /// Reads, parses, and validates a document from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Travel distance in metres from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> i64 {
        self.distances[from * self.size + to]
    }

    /// Travel duration in seconds from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn duration(&self, from: usize, to: usize) -> i64 {
        self.durations[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Rounds a validated grid into a flat row-major buffer, rejecting
/// negative and non-finite cells.
fn round_grid(grid: &[Vec<f64>], field: &str) -> Result<Vec<i64>> {
    let mut out = Vec::with_capacity(grid.len() * grid.len());
    for row in grid {
        for &cell in row {
            if !cell.is_finite() || cell < 0.0 {
                return Err(Error::MalformedMatrix(format!(
                    "{field} contains a negative or non-finite cell ({cell})"
                )));
            }
            out.push(cell.round() as i64);
        }
    }
    Ok(out)
}
