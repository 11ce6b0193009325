//! Per-generation fitness statistics.

use serde::Serialize;

/// Summary of one generation's fitness vector.
///
/// `best` and `runner_up` come from a single left-to-right scan in which any
/// value **greater than or equal to** the running best takes over, shifting the
/// previous best into the runner-up slot. Ties therefore resolve to the *last*
/// individual holding the maximum, and `runner_up_index` is whichever index held
/// the best just before it. It is not necessarily the second highest distinct
/// value. This tie-break looks accidental, but the adaptive rates depend on it
/// (`best == runner_up` triples the mutation rate), so it is kept as is.
///
/// The scan starts every generation from `best = runner_up = 0.0` with both
/// indices at `0`; nothing carries over from the previous generation. When
/// individual 0 holds the unique best, `runner_up_index` is therefore `0` as
/// well, and both crossover parents are the same genome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitnessStats {
    pub sum: f64,
    pub average: f64,
    pub best: f64,
    pub best_index: usize,
    pub runner_up: f64,
    pub runner_up_index: usize,
}

impl FitnessStats {
    /// Computes statistics from fitness values in population order.
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_training::statistics::FitnessStats;
    ///
    /// let stats = FitnessStats::from_fitness(&[0.5, 0.75, 0.25, 0.75]).unwrap();
    /// assert_eq!(stats.best_index, 3);
    /// assert_eq!(stats.runner_up_index, 1);
    /// assert!(stats.best_is_tied());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_fitness(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum = values.iter().sum::<f64>();
        let average = sum / values.len() as f64;

        let mut best = 0.0;
        let mut best_index = 0;
        let mut runner_up = 0.0;
        let mut runner_up_index = 0;
        for (index, &fitness) in values.iter().enumerate() {
            if fitness >= best {
                runner_up = best;
                runner_up_index = best_index;
                best = fitness;
                best_index = index;
            }
        }

        Some(Self {
            sum,
            average,
            best,
            best_index,
            runner_up,
            runner_up_index,
        })
    }

    /// `true` once some individual placed every queen.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.best == 1.0
    }

    /// `true` when the runner-up slot carries the same fitness as the best.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn best_is_tied(&self) -> bool {
        self.best == self.runner_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(FitnessStats::from_fitness(&[]), None);
    }

    #[test]
    fn test_sum_and_average() {
        let stats = FitnessStats::from_fitness(&[0.25, 0.5, 0.75, 1.0]).unwrap();
        assert!((stats.sum - 2.5).abs() < 1e-12);
        assert!((stats.average - 0.625).abs() < 1e-12);
        assert!(stats.is_solved());
        assert_eq!(stats.best_index, 3);
    }

    #[test]
    fn test_strictly_increasing_tracks_previous_best() {
        let stats = FitnessStats::from_fitness(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!((stats.best_index, stats.runner_up_index), (2, 1));
        assert!((stats.runner_up - 0.2).abs() < 1e-12);
        assert!(!stats.best_is_tied());
    }

    #[test]
    fn test_runner_up_is_not_second_highest_distinct_value() {
        // 0.5 comes after the best and never enters the runner-up slot
        let stats = FitnessStats::from_fitness(&[0.2, 0.9, 0.5]).unwrap();
        assert_eq!(stats.best_index, 1);
        assert_eq!(stats.runner_up_index, 0);
        assert!((stats.runner_up - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_ties_resolve_to_last() {
        let stats = FitnessStats::from_fitness(&[0.75, 0.25, 0.75, 0.5, 0.75]).unwrap();
        assert_eq!(stats.best_index, 4);
        assert_eq!(stats.runner_up_index, 2);
        assert!(stats.best_is_tied());
    }

    #[test]
    fn test_single_leading_best() {
        let stats = FitnessStats::from_fitness(&[0.5, 0.25]).unwrap();
        assert_eq!((stats.best_index, stats.runner_up_index), (0, 0));
        assert!(stats.runner_up.abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_zero_is_tied() {
        let stats = FitnessStats::from_fitness(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!((stats.best_index, stats.runner_up_index), (2, 1));
        assert!(stats.best_is_tied());
        assert!(!stats.is_solved());
    }
}
