//! Route type: an ordered visiting sequence with fixed endpoints.

/// An ordered sequence of node indices: a permutation of `0..N-1` with
/// the depot fixed at position 0 and the terminal node `N-1` fixed at
/// the last position. Interior nodes are the collection points.
///
/// # Examples
///
/// ```
/// use collect_routing::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 3]).expect("valid route");
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.interior(), &[2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Wraps a visiting sequence, checking the route invariants.
    ///
    /// Returns `None` if the sequence is shorter than two stops, does
    /// not start at the depot, does not end at the terminal node, or
    /// is not a permutation of `0..N-1`.
    pub fn new(stops: Vec<usize>) -> Option<Self> {
        if !is_valid_sequence(&stops) {
            return None;
        }
        Some(Self { stops })
    }

    /// The full visiting sequence, depot and terminal included.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// The interior collection points, in visiting order.
    pub fn interior(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of stops, depot and terminal included. Always at least
    /// two, so there is no `is_empty` counterpart.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stops.len()
    }
}

/// Checks that `stops` is a permutation of `0..N-1` with fixed
/// endpoints `0` and `N-1`.
fn is_valid_sequence(stops: &[usize]) -> bool {
    let n = stops.len();
    if n < 2 || stops[0] != 0 || stops[n - 1] != n - 1 {
        return false;
    }
    let mut seen = vec![false; n];
    for &s in stops {
        if s >= n || seen[s] {
            return false;
        }
        seen[s] = true;
    }
    true
}
