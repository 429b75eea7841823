//! Population arena for the genetic optimizer.

/// A fixed-size arena of route buffers plus their fitness values.
///
/// The evolutionary loop keeps two arenas and swaps them at each
/// generation turnover (double buffering): elites and offspring are
/// written into the *next* arena while parents are read from the
/// *current* one, so parent and child routes never alias.
#[derive(Debug, Clone)]
pub struct Population {
    slots: Vec<Vec<usize>>,
    fitness: Vec<i64>,
}

impl Population {
    /// Creates an arena of `population_size` zeroed route buffers of
    /// length `route_len`, all with unset (maximum) fitness.
    pub fn with_capacity(population_size: usize, route_len: usize) -> Self {
        Self {
            slots: vec![vec![0; route_len]; population_size],
            fitness: vec![i64::MAX; population_size],
        }
    }

    /// Number of individuals in the arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the arena holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The route buffer of one slot.
    pub fn route(&self, slot: usize) -> &[usize] {
        &self.slots[slot]
    }

    /// Mutable access to one slot's route buffer.
    pub fn route_mut(&mut self, slot: usize) -> &mut [usize] {
        &mut self.slots[slot]
    }

    /// The fitness (total distance) of one slot.
    pub fn fitness(&self, slot: usize) -> i64 {
        self.fitness[slot]
    }

    /// Records the fitness of one slot.
    pub fn set_fitness(&mut self, slot: usize, fitness: i64) {
        self.fitness[slot] = fitness;
    }

    /// Copies an individual (route and fitness) from another arena.
    pub fn copy_from(&mut self, slot: usize, source: &Population, source_slot: usize) {
        self.slots[slot].copy_from_slice(&source.slots[source_slot]);
        self.fitness[slot] = source.fitness[source_slot];
    }

    /// Slot indices sorted ascending by fitness (best first).
    pub fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.slots.len()).collect();
        order.sort_by_key(|&slot| self.fitness[slot]);
        order
    }
}
