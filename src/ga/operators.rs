//! Genetic operators over fixed-endpoint route buffers.
//!
//! All operators treat positions `1..=n-2` as the interior range; the
//! depot at position 0 and the terminal at position `n-1` never move.

use rand::Rng;

use super::population::Population;

/// Fills a buffer with the identity route `0, 1, ..., n-1`.
pub fn init_identity(route: &mut [usize]) {
    for (position, stop) in route.iter_mut().enumerate() {
        *stop = position;
    }
}

/// Fisher-Yates shuffle of the interior positions, endpoints fixed.
pub fn shuffle_interior<R: Rng>(route: &mut [usize], rng: &mut R) {
    let n = route.len();
    if n < 4 {
        return;
    }
    for i in (2..n - 1).rev() {
        let j = rng.random_range(1..=i);
        route.swap(i, j);
    }
}

/// Tournament selection: draws `k` slot indices uniformly at random
/// with replacement and returns the one with the lowest distance.
pub fn tournament_select<R: Rng>(population: &Population, k: usize, rng: &mut R) -> usize {
    debug_assert!(!population.is_empty() && k > 0);
    let mut winner = rng.random_range(0..population.len());
    for _ in 1..k {
        let challenger = rng.random_range(0..population.len());
        if population.fitness(challenger) < population.fitness(winner) {
            winner = challenger;
        }
    }
    winner
}

/// Picks two cut points `p1 < p2` within the interior range `[1, n-2]`.
///
/// Requires at least two interior positions (`n >= 4`).
pub fn pick_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 4);
    let p1 = rng.random_range(1..n - 2);
    let p2 = rng.random_range(p1 + 1..=n - 2);
    (p1, p2)
}

/// Order-preserving two-cut crossover, writing one child into `child`.
///
/// The segment `[p1, p2]` is copied verbatim from `segment_parent`;
/// the remaining interior positions are filled left to right with
/// `fill_parent`'s interior nodes that do not already appear in the
/// copied segment, preserving `fill_parent`'s relative order. The
/// symmetric sibling is produced by calling this again with the
/// parents swapped and the same cut points.
pub fn order_crossover(
    child: &mut [usize],
    segment_parent: &[usize],
    fill_parent: &[usize],
    p1: usize,
    p2: usize,
) {
    let n = child.len();
    child[0] = 0;
    child[n - 1] = n - 1;

    let mut in_segment = vec![false; n];
    for i in p1..=p2 {
        child[i] = segment_parent[i];
        in_segment[segment_parent[i]] = true;
    }

    let mut fill = fill_parent[1..n - 1]
        .iter()
        .copied()
        .filter(|&stop| !in_segment[stop]);
    for i in 1..n - 1 {
        if i < p1 || i > p2 {
            child[i] = fill
                .next()
                .expect("fill parent provides one node per open position");
        }
    }
}

/// With probability `rate`, swaps two uniformly-random interior
/// positions (a single swap per mutation event).
pub fn swap_mutation<R: Rng>(route: &mut [usize], rate: f64, rng: &mut R) {
    let n = route.len();
    if n < 4 {
        return;
    }
    if rng.random_range(0.0..1.0) < rate {
        let a = rng.random_range(1..n - 1);
        let b = rng.random_range(1..n - 1);
        route.swap(a, b);
    }
}
