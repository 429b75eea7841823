//! Cheapest-arc first-solution heuristic.
//!
//! Builds a route greedily: starting from the depot, always traverse
//! the cheapest arc to an unvisited interior node; the terminal node is
//! appended last. O(n²).

use super::model::RoutingModel;

/// Constructs an initial visiting sequence by cheapest-arc insertion.
///
/// Returns `None` for models with fewer than two nodes, which admit no
/// route.
pub fn cheapest_arc_route(model: &RoutingModel<'_>) -> Option<Vec<usize>> {
    let n = model.size();
    if n < 2 {
        return None;
    }

    let mut route = Vec::with_capacity(n);
    route.push(model.depot());

    let mut visited = vec![false; n];
    visited[model.depot()] = true;
    visited[n - 1] = true; // terminal is fixed at the last position

    let mut current = model.depot();
    for _ in 0..n.saturating_sub(2) {
        let mut best: Option<(usize, i64)> = None;
        for candidate in 1..n - 1 {
            if visited[candidate] {
                continue;
            }
            let cost = model.arc_cost(current, candidate);
            if best.is_none() || cost < best.expect("checked is_none").1 {
                best = Some((candidate, cost));
            }
        }
        let (next, _) = best.expect("one unvisited interior node per iteration");
        visited[next] = true;
        route.push(next);
        current = next;
    }

    route.push(n - 1);
    Some(route)
}
