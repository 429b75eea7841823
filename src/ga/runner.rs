//! Genetic evolutionary loop for route optimization.
//!
//! [`GeneticOptimizer`] evolves a population of candidate visiting
//! orders: initialization → evaluation → elitism → tournament
//! selection → order crossover → swap mutation → repeat, until the
//! generation cap or the early-stopping patience is reached.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::evaluation;
use crate::matrix::CostMatrix;
use crate::models::{OptimizationResult, Route};
use crate::progress::ProgressSink;

use super::config::GaConfig;
use super::operators::{
    init_identity, order_crossover, pick_cut_points, shuffle_interior, swap_mutation,
    tournament_select,
};
use super::population::Population;

/// Genetic route optimizer over one immutable cost matrix.
///
/// Fitness is the total distance of a candidate route; duration is
/// derived only for the reported best. Elitism guarantees the recorded
/// best distance is non-increasing across generations.
///
/// # Examples
///
/// ```
/// use collect_routing::ga::{GaConfig, GeneticOptimizer};
/// use collect_routing::matrix::CostMatrix;
/// use collect_routing::progress::NullSink;
///
/// let matrix = CostMatrix::from_slice(br#"{
///     "distances": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]],
///     "durations": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]]
/// }"#).expect("valid matrix");
///
/// let optimizer = GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(42));
/// let result = optimizer.run(&NullSink).expect("optimization succeeds");
/// assert_eq!(result.total_distance, 75);
/// ```
pub struct GeneticOptimizer<'a> {
    matrix: &'a CostMatrix,
    config: GaConfig,
}

impl<'a> GeneticOptimizer<'a> {
    /// Creates an optimizer for the given matrix and configuration.
    pub fn new(matrix: &'a CostMatrix, config: GaConfig) -> Self {
        Self { matrix, config }
    }

    /// Runs the evolutionary loop to convergence or to the generation
    /// cap and returns the best route ever observed.
    ///
    /// Progress events are published to `sink`; delivery is best effort
    /// and never affects the result.
    pub fn run(&self, sink: &dyn ProgressSink) -> Result<OptimizationResult> {
        self.config.validate().map_err(|reason| Error::Internal {
            generation: 0,
            reason,
        })?;

        let n = self.matrix.size();
        sink.publish(format!(
            "starting route optimization using genetic algorithm ({n} points)"
        ));
        tracing::debug!(n, "genetic optimization started");

        // With at most one interior node there is exactly one valid
        // route; no crossover or mutation can occur.
        if n <= 3 {
            let stops: Vec<usize> = (0..n).collect();
            return self.finish(stops, 0, sink);
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let population_size = self.config.population_size;
        let mut current = Population::with_capacity(population_size, n);
        let mut next = Population::with_capacity(population_size, n);

        for slot in 0..population_size {
            let fitness = {
                let route = current.route_mut(slot);
                init_identity(route);
                shuffle_interior(route, &mut rng);
                evaluation::total_distance(route, self.matrix)
            };
            current.set_fitness(slot, fitness);
        }

        let mut best_stops: Vec<usize> = Vec::new();
        let mut best_distance = i64::MAX;
        let mut stagnation = 0usize;
        let mut generations_run = 0usize;

        for generation in 0..self.config.max_generations {
            generations_run = generation;
            let order = current.sorted_order();

            let generation_best = current.fitness(order[0]);
            if generation_best < best_distance {
                best_distance = generation_best;
                best_stops = current.route(order[0]).to_vec();
                stagnation = 0;
                sink.publish(format!(
                    "generation {generation}: new best route found, distance {:.2} km",
                    best_distance as f64 / 1000.0
                ));
                tracing::debug!(generation, best_distance, "new incumbent");
            } else {
                stagnation += 1;
                if stagnation > self.config.patience {
                    tracing::debug!(generation, stagnation, "early stop");
                    break;
                }
            }

            // Elites carry over unchanged into the next arena.
            for (slot, &source) in order.iter().enumerate().take(self.config.elite_size) {
                next.copy_from(slot, &current, source);
            }

            // Offspring fill the remainder.
            let mut filled = self.config.elite_size;
            while filled < population_size {
                let parent_a = tournament_select(&current, self.config.tournament_size, &mut rng);
                let parent_b = tournament_select(&current, self.config.tournament_size, &mut rng);
                let (p1, p2) = pick_cut_points(n, &mut rng);

                filled = self.breed(
                    &current, &mut next, parent_a, parent_b, p1, p2, filled, &mut rng,
                );
                if filled < population_size {
                    filled = self.breed(
                        &current, &mut next, parent_b, parent_a, p1, p2, filled, &mut rng,
                    );
                }
            }

            std::mem::swap(&mut current, &mut next);
        }

        if best_stops.is_empty() {
            return Err(Error::Internal {
                generation: generations_run,
                reason: "no incumbent recorded".into(),
            });
        }

        self.finish(best_stops, generations_run, sink)
    }

    /// Writes one child into the next arena and returns the new fill
    /// count.
    #[allow(clippy::too_many_arguments)]
    fn breed(
        &self,
        current: &Population,
        next: &mut Population,
        segment_parent: usize,
        fill_parent: usize,
        p1: usize,
        p2: usize,
        slot: usize,
        rng: &mut StdRng,
    ) -> usize {
        let fitness = {
            let child = next.route_mut(slot);
            order_crossover(
                child,
                current.route(segment_parent),
                current.route(fill_parent),
                p1,
                p2,
            );
            swap_mutation(child, self.config.mutation_rate, rng);
            evaluation::total_distance(child, self.matrix)
        };
        next.set_fitness(slot, fitness);
        slot + 1
    }

    /// Wraps the winning sequence into the result shape, deriving the
    /// duration and publishing the completion event.
    fn finish(
        &self,
        stops: Vec<usize>,
        generation: usize,
        sink: &dyn ProgressSink,
    ) -> Result<OptimizationResult> {
        let total_distance = evaluation::total_distance(&stops, self.matrix);
        let total_duration = evaluation::total_duration(&stops, self.matrix);
        let route = Route::new(stops).ok_or_else(|| Error::Internal {
            generation,
            reason: "optimizer produced an invalid route".into(),
        })?;

        sink.publish(format!(
            "optimization complete: total distance {:.2} km, total duration {total_duration} s",
            total_distance as f64 / 1000.0
        ));
        tracing::debug!(total_distance, total_duration, "genetic optimization finished");

        Ok(OptimizationResult::new(route, total_distance, total_duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{ChannelSink, NullSink};

    fn sample_matrix() -> CostMatrix {
        CostMatrix::from_slice(
            br#"{
                "distances": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]],
                "durations": [[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]]
            }"#,
        )
        .expect("valid matrix")
    }

    #[test]
    fn test_converges_to_brute_force_optimum() {
        // Both interior orders cost 75: 10+35+30 and 15+35+25.
        let matrix = sample_matrix();
        let optimizer = GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(42));
        let result = optimizer.run(&NullSink).expect("run succeeds");
        assert_eq!(result.total_distance, 75);
        let route = result.route.expect("route present");
        assert_eq!(route.stops()[0], 0);
        assert_eq!(*route.stops().last().expect("non-empty"), 3);
    }

    #[test]
    fn test_duration_includes_collection_penalty() {
        let matrix = sample_matrix();
        let optimizer = GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(42));
        let result = optimizer.run(&NullSink).expect("run succeeds");
        // Travel time equals distance here, plus 30 s for each of the
        // two interior stops.
        assert_eq!(result.total_duration, 75 + 60);
    }

    #[test]
    fn test_two_node_boundary() {
        let matrix = CostMatrix::from_slice(
            br#"{"distances": [[0, 12], [12, 0]], "durations": [[0, 45], [45, 0]]}"#,
        )
        .expect("valid matrix");
        let optimizer = GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(1));
        let result = optimizer.run(&NullSink).expect("run succeeds");
        assert_eq!(result.route.expect("route").stops(), &[0, 1]);
        assert_eq!(result.total_distance, 12);
        // Single direct leg, no collection penalty.
        assert_eq!(result.total_duration, 45);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let matrix = sample_matrix();
        let config = GaConfig::default().with_seed(7);
        let a = GeneticOptimizer::new(&matrix, config.clone())
            .run(&NullSink)
            .expect("run succeeds");
        let b = GeneticOptimizer::new(&matrix, config)
            .run(&NullSink)
            .expect("run succeeds");
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let matrix = sample_matrix();
        let optimizer =
            GeneticOptimizer::new(&matrix, GaConfig::default().with_population_size(1));
        assert!(matches!(
            optimizer.run(&NullSink),
            Err(Error::Internal { generation: 0, .. })
        ));
    }

    #[test]
    fn test_progress_events_published() {
        let matrix = sample_matrix();
        let (sink, mut rx) = ChannelSink::new();
        GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(42))
            .run(&sink)
            .expect("run succeeds");

        let mut messages = Vec::new();
        while let Ok(m) = rx.try_recv() {
            messages.push(m);
        }
        assert!(messages[0].contains("starting route optimization"));
        assert!(messages.iter().any(|m| m.contains("new best route")));
        assert!(messages
            .last()
            .expect("at least the start message")
            .contains("optimization complete"));
    }

    #[test]
    fn test_best_distance_is_non_increasing_across_generations() {
        // Elites carry over unchanged, so every published incumbent
        // must be strictly better than the previous one. Twelve nodes
        // leave enough slack that the initial population cannot sit at
        // the optimum.
        let matrix = ring_matrix(12);
        let (sink, mut rx) = ChannelSink::new();
        GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(3))
            .run(&sink)
            .expect("run succeeds");

        let mut incumbents = Vec::new();
        while let Ok(m) = rx.try_recv() {
            if let Some(rest) = m.split("distance ").nth(1) {
                if m.contains("new best route") {
                    let km: f64 = rest
                        .trim_end_matches(" km")
                        .parse()
                        .expect("distance is numeric");
                    incumbents.push(km);
                }
            }
        }

        assert!(
            incumbents.len() >= 2,
            "expected several incumbent improvements, got {incumbents:?}"
        );
        for pair in incumbents.windows(2) {
            assert!(
                pair[1] < pair[0],
                "incumbent distance rose from {} to {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_dropped_receiver_does_not_fail_run() {
        let matrix = sample_matrix();
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        let result = GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(42)).run(&sink);
        assert!(result.is_ok());
    }

    /// `n` nodes on a ring, leg costs in whole metres.
    fn ring_matrix(n: usize) -> CostMatrix {
        let half = n as i64;
        let mut distances = vec![vec![0.0; n]; n];
        for (i, row) in distances.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let d = (i as i64 - j as i64).abs().min(half - (i as i64 - j as i64).abs());
                *cell = (d * 100) as f64;
            }
        }
        let doc = serde_json::json!({ "distances": distances, "durations": distances });
        CostMatrix::from_slice(doc.to_string().as_bytes()).expect("valid matrix")
    }

    #[test]
    fn test_larger_instance_yields_valid_route() {
        // Exact optimum is not asserted, only route validity and a sane
        // cost.
        let matrix = ring_matrix(8);
        let result = GeneticOptimizer::new(&matrix, GaConfig::default().with_seed(3))
            .run(&NullSink)
            .expect("run succeeds");
        let route = result.route.expect("route present");
        assert_eq!(route.len(), 8);
        assert!(result.total_distance > 0);
    }
}
