use chrono::{DateTime, Utc};
use nqueens_engine::{Position, SearchSeed, Solution};
use nqueens_training::{config::SearchConfig, evolution::SearchOutcome};
use serde::{Deserialize, Serialize};

/// Result of a `solve` run, written as JSON.
///
/// Carries the seed and full configuration so the run can be replayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub finished_at: DateTime<Utc>,
    pub seed: SearchSeed,
    pub config: SearchConfig,
    pub solved: bool,
    /// Generation the solution was found in, or the number of generations run.
    pub generation: usize,
    pub best_fitness: f64,
    pub solution: Solution,
    pub queens: Vec<Position>,
}

impl SearchRecord {
    pub fn new(seed: SearchSeed, config: SearchConfig, outcome: &SearchOutcome) -> Self {
        let solution = outcome.solution().clone();
        let queens = solution
            .decode(config.board_size)
            .board()
            .queen_positions()
            .collect();
        Self {
            finished_at: Utc::now(),
            seed,
            config: SearchConfig {
                seed: Some(seed),
                ..config
            },
            solved: outcome.is_solved(),
            generation: outcome.generation(),
            best_fitness: outcome.best_fitness(),
            solution,
            queens,
        }
    }
}
