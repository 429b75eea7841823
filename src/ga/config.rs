//! Genetic optimizer configuration.

/// Configuration for the genetic route optimizer.
///
/// # Defaults
///
/// ```
/// use collect_routing::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use collect_routing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in each generation.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability per child per generation that two interior positions
    /// are swapped (a single swap per mutation event).
    pub mutation_rate: f64,

    /// Number of individuals drawn (with replacement) per tournament
    /// when selecting a parent; the lowest-distance entrant wins.
    pub tournament_size: usize,

    /// Number of best individuals carried unchanged into the next
    /// generation. Elitism makes the best-known distance non-increasing
    /// across generations.
    pub elite_size: usize,

    /// Number of consecutive generations without improvement tolerated
    /// before stopping early. The run stops once the stagnation counter
    /// exceeds this value.
    pub patience: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            mutation_rate: 0.015,
            tournament_size: 5,
            elite_size: 10,
            patience: 20,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the early-stopping patience.
    pub fn with_patience(mut self, generations: usize) -> Self {
        self.patience = generations;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.elite_size >= self.population_size {
            return Err("elite_size must leave room for offspring".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 100);
        assert!((config.mutation_rate - 0.015).abs() < 1e-12);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.elite_size, 10);
        assert_eq!(config.patience, 20);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(200)
            .with_mutation_rate(0.1)
            .with_tournament_size(3)
            .with_elite_size(5)
            .with_patience(10)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 200);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.elite_size, 5);
        assert_eq!(config.patience, 10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_mutation_rate_clamped() {
        let config = GaConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-12);
        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert!(config.mutation_rate.abs() < 1e-12);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_elite_fills_population() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_size(10);
        assert!(config.validate().is_err());
    }
}
