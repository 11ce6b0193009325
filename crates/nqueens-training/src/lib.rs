//! Adaptive genetic search for N-queens placements.
//!
//! The search evolves a population of [`Solution`](nqueens_engine::Solution)s,
//! each scored by decoding it on an empty board (see `nqueens-engine`).
//!
//! # Architecture
//!
//! ```text
//! Population (P genomes of Q free-position ordinals)
//!     ↓ decode + fitness
//! Fitness vector
//!     ↓ summarize
//! FitnessStats (average, last-wins best / runner-up)
//!     ↓ derive
//! AdaptiveRates (replacement, elitism, mutation, crossover, re-seeding)
//!     ↓ apply in place
//! Next generation
//! ```
//!
//! # Modules
//!
//! - [`config`]: run parameters and validation
//! - [`genes`]: random initialization, point mutation and single-point crossover
//! - [`population`]: fixed-size population and fitness evaluation
//! - [`statistics`]: per-generation fitness summary
//! - [`rates`]: the pure mapping from statistics to operator rates
//! - [`evolution`]: the generational loop
//!
//! # Example
//!
//! ```
//! use nqueens_engine::SearchSeed;
//! use nqueens_training::{config::SearchConfig, evolution::{self, GenerationReport}};
//!
//! let config = SearchConfig::square(5, 60, 200);
//! let outcome = evolution::search(config, SearchSeed::new(1), &mut |report: &GenerationReport| {
//!     assert!(report.stats.best <= 1.0);
//! })
//! .unwrap();
//! assert_eq!(outcome.solution().len(), 5);
//! ```
//!
//! # Randomness
//!
//! Every stochastic decision draws from one caller-supplied RNG, so runs are
//! reproducible from a [`SearchSeed`](nqueens_engine::SearchSeed). The loop is
//! single-threaded and fully sequential.

pub mod config;
pub mod evolution;
pub mod genes;
pub mod population;
pub mod rates;
pub mod statistics;
