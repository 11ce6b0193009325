//! Adaptive operator rates derived from population statistics.
//!
//! Rates are recomputed every generation from the average, best and runner-up
//! fitness, so the loop slows down once a clear leader emerges, speeds up when
//! the population stagnates, and throws away individuals that lag far behind a
//! strong population.

use crate::statistics::FitnessStats;

/// `(average above, fitness below)` pairs that force a random reset.
const RESET_BANDS: [(f64, f64); 3] = [(0.9, 0.7), (0.8, 0.6), (0.7, 0.5)];
/// Individuals below `average * LAGGARD_FACTOR` are reset with [`LAGGARD_RESET_PROBABILITY`].
const LAGGARD_FACTOR: f64 = 0.3;
const LAGGARD_RESET_PROBABILITY: f64 = 0.5;

const SLOW_MUTATION_RATE: f64 = 0.15;
const SLOW_CROSSOVER_RATE: f64 = 0.07;
const FAST_MUTATION_RATE: f64 = 0.4;
const FAST_CROSSOVER_RATE: f64 = 0.4;
const TIED_MUTATION_FACTOR: f64 = 3.0;

const CONVERGED_AVERAGE: f64 = 0.9;
const CONVERGED_NEW_RANDOM_RATE: f64 = 0.4;
const NEW_RANDOM_RATE: f64 = 0.2;

/// Individuals above `best * ELITE_FACTOR` count as elite.
const ELITE_FACTOR: f64 = 0.9;
/// Probability that an elite individual skips all operators for the generation.
pub const ELITE_SKIP_PROBABILITY: f64 = 0.9;

/// What happens to an individual before the stochastic operators run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Replacement {
    /// Replace with a fresh random genome.
    Reset,
    /// Replace with a fresh random genome with the given probability.
    ResetWithProbability(f64),
    Keep,
}

/// Operator rates for one generation.
///
/// Probabilities are compared as `uniform[0, 1) <= rate`, so a rate above 1.0
/// (the tripled fast mutation rate) always fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveRates {
    /// Population average the replacement policy is measured against.
    pub average: f64,
    /// Chance to mutate one gene of a random individual, per processed individual.
    pub mutation_rate: f64,
    /// Chance to overwrite the processed individual with a child of best and runner-up.
    pub crossover_rate: f64,
    /// Chance to overwrite the processed individual with a random genome.
    pub new_random_rate: f64,
    /// Fitness strictly above this is elite.
    pub elite_cutoff: f64,
}

impl AdaptiveRates {
    /// Derives the rates from the generation's average, best and runner-up fitness.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_training::rates::AdaptiveRates;
    ///
    /// // a leader ahead of the pack slows the search down
    /// let rates = AdaptiveRates::derive(0.5, 0.75, 0.5);
    /// assert_eq!(rates.mutation_rate, 0.15);
    /// assert_eq!(rates.crossover_rate, 0.07);
    /// ```
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn derive(average: f64, best: f64, runner_up: f64) -> Self {
        let (mut mutation_rate, crossover_rate) = if best > average {
            (SLOW_MUTATION_RATE, SLOW_CROSSOVER_RATE)
        } else {
            (FAST_MUTATION_RATE, FAST_CROSSOVER_RATE)
        };
        if best == runner_up {
            mutation_rate *= TIED_MUTATION_FACTOR;
        }
        let new_random_rate = if average > CONVERGED_AVERAGE {
            CONVERGED_NEW_RANDOM_RATE
        } else {
            NEW_RANDOM_RATE
        };
        Self {
            average,
            mutation_rate,
            crossover_rate,
            new_random_rate,
            elite_cutoff: best * ELITE_FACTOR,
        }
    }

    #[must_use]
    pub fn from_stats(stats: &FitnessStats) -> Self {
        Self::derive(stats.average, stats.best, stats.runner_up)
    }

    /// Replacement decision for an individual with the given fitness.
    #[must_use]
    pub fn replacement(&self, fitness: f64) -> Replacement {
        let lagging_strong_population = RESET_BANDS
            .iter()
            .any(|&(average, floor)| self.average > average && fitness < floor);
        if lagging_strong_population {
            Replacement::Reset
        } else if fitness < self.average * LAGGARD_FACTOR {
            Replacement::ResetWithProbability(LAGGARD_RESET_PROBABILITY)
        } else {
            Replacement::Keep
        }
    }

    #[must_use]
    pub fn is_elite(&self, fitness: f64) -> bool {
        fitness > self.elite_cutoff
    }
}
