//! Fixed-size population of genomes.

use nqueens_engine::Solution;
use rand::Rng;

use crate::genes;

/// An ordered collection of solutions.
///
/// Size and genome length never change once built; operators overwrite
/// solutions in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    solutions: Vec<Solution>,
}

impl Population {
    /// Creates `count` random solutions of `queens` genes in `[0, cell_count)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_engine::SearchSeed;
    /// use nqueens_training::population::Population;
    ///
    /// let population = Population::random(100, 8, 64, &mut SearchSeed::new(1).rng());
    /// assert_eq!(population.len(), 100);
    /// assert!(population.solutions().iter().all(|s| s.len() == 8));
    /// ```
    #[must_use]
    pub fn random<R>(count: usize, queens: usize, cell_count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let solutions = (0..count)
            .map(|_| genes::random(rng, queens, cell_count))
            .collect();
        Self { solutions }
    }

    #[must_use]
    pub fn from_solutions(solutions: Vec<Solution>) -> Self {
        Self { solutions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    #[must_use]
    pub fn solution(&self, index: usize) -> &Solution {
        &self.solutions[index]
    }

    pub(crate) fn solution_mut(&mut self, index: usize) -> &mut Solution {
        &mut self.solutions[index]
    }

    /// Decodes every solution from scratch and returns fitness in population order.
    #[must_use]
    pub fn evaluate_fitness(&self, board_size: usize) -> Vec<f64> {
        self.solutions
            .iter()
            .map(|solution| solution.fitness(board_size))
            .collect()
    }
}
