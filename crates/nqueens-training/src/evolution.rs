//! The generational search loop.
//!
//! Each generation:
//!
//! 1. **Evaluate** every individual by decoding it from an empty board
//! 2. **Summarize** the fitness vector ([`FitnessStats`])
//! 3. **Stop** if the best individual placed every queen
//! 4. **Adapt** operator rates to the statistics ([`AdaptiveRates`])
//! 5. **Apply** replacement, elitism, mutation, crossover and random
//!    re-seeding to each individual in population order
//!
//! Operators write into the population immediately. Later individuals in the
//! same pass see those writes, including crossover reading the best and
//! runner-up slots after they may have been mutated or replaced earlier in the
//! pass. Mutation targets a uniformly random individual rather than the one
//! being processed, acting as a population-wide perturbation.

use nqueens_engine::{SearchSeed, Solution};
use rand::Rng;
use serde::Serialize;

use crate::{
    config::{ConfigError, SearchConfig},
    genes,
    population::Population,
    rates::{AdaptiveRates, ELITE_SKIP_PROBABILITY, Replacement},
    statistics::FitnessStats,
};

/// Line-level summary emitted once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationReport {
    pub generation: usize,
    #[serde(flatten)]
    pub stats: FitnessStats,
}

/// Receives a [`GenerationReport`] after each evaluated generation.
pub trait GenerationObserver {
    fn on_generation(&mut self, report: &GenerationReport);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationReport),
{
    fn on_generation(&mut self, report: &GenerationReport) {
        self(report);
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// An individual placed every queen.
    Solved {
        generation: usize,
        index: usize,
        solution: Solution,
    },
    /// The generation budget ran out. `solution` is the best individual of the
    /// last evaluated generation, as it was when evaluated.
    Exhausted {
        generations: usize,
        best_fitness: f64,
        solution: Solution,
    },
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub fn solution(&self) -> &Solution {
        match self {
            Self::Solved { solution, .. } | Self::Exhausted { solution, .. } => solution,
        }
    }

    /// Generation the solution was found in, or the number of generations run.
    #[must_use]
    pub fn generation(&self) -> usize {
        match self {
            Self::Solved { generation, .. } => *generation,
            Self::Exhausted { generations, .. } => *generations,
        }
    }

    #[must_use]
    pub fn best_fitness(&self) -> f64 {
        match self {
            Self::Solved { .. } => 1.0,
            Self::Exhausted { best_fitness, .. } => *best_fitness,
        }
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    fitness: f64,
    solution: Solution,
}

/// Drives a population through generations until it is solved or the budget
/// runs out.
///
/// # Example
///
/// ```
/// use nqueens_engine::SearchSeed;
/// use nqueens_training::{
///     config::SearchConfig,
///     evolution::{Evolver, GenerationReport},
/// };
///
/// let config = SearchConfig::square(4, 100, 300);
/// let mut evolver = Evolver::new(config, SearchSeed::new(5).rng()).unwrap();
/// let outcome = evolver.run(&mut |_: &GenerationReport| {});
/// assert!(outcome.generation() <= 300);
/// assert_eq!(outcome.solution().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Evolver<R> {
    config: SearchConfig,
    population: Population,
    rng: R,
    generation: usize,
    last_best: Option<Snapshot>,
}

impl<R> Evolver<R>
where
    R: Rng,
{
    /// Validates `config` and builds a random initial population from `rng`.
    pub fn new(config: SearchConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = Population::random(
            config.population_size,
            config.queens,
            config.cell_count(),
            &mut rng,
        );
        Ok(Self::from_parts(config, population, rng))
    }

    /// Starts from an existing population, which must match `config`.
    pub fn with_population(
        config: SearchConfig,
        population: Population,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape_ok = population.len() == config.population_size
            && population
                .solutions()
                .iter()
                .all(|solution| solution.len() == config.queens);
        if !shape_ok {
            return Err(ConfigError::PopulationShape {
                population_size: config.population_size,
                queens: config.queens,
            });
        }
        Ok(Self::from_parts(config, population, rng))
    }

    fn from_parts(config: SearchConfig, population: Population, rng: R) -> Self {
        Self {
            config,
            population,
            rng,
            generation: 0,
            last_best: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Index of the next generation to evaluate.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Runs one generation.
    ///
    /// If the evaluated population is solved, the population is left untouched
    /// and the generation counter does not advance.
    pub fn step(&mut self) -> GenerationReport {
        let fitness = self.population.evaluate_fitness(self.config.board_size);
        let stats =
            FitnessStats::from_fitness(&fitness).expect("population should never be empty");
        let report = GenerationReport {
            generation: self.generation,
            stats,
        };
        log::debug!(
            "generation {}: sum={:.3} average={:.4} best={:.3} runner-up={:.3}",
            report.generation,
            stats.sum,
            stats.average,
            stats.best,
            stats.runner_up,
        );

        if stats.is_solved() {
            return report;
        }

        self.last_best = Some(Snapshot {
            fitness: stats.best,
            solution: self.population.solution(stats.best_index).clone(),
        });
        self.apply_operators(&fitness, &stats);
        self.generation += 1;
        report
    }

    /// Runs generations until solved or `max_generations` is reached.
    pub fn run<O>(&mut self, observer: &mut O) -> SearchOutcome
    where
        O: GenerationObserver + ?Sized,
    {
        while self.generation < self.config.max_generations {
            let report = self.step();
            observer.on_generation(&report);
            if report.stats.is_solved() {
                let index = report.stats.best_index;
                log::info!(
                    "solved {} queens in generation {}",
                    self.config.queens,
                    report.generation
                );
                return SearchOutcome::Solved {
                    generation: report.generation,
                    index,
                    solution: self.population.solution(index).clone(),
                };
            }
        }

        let Snapshot { fitness, solution } =
            self.last_best.take().unwrap_or_else(|| self.current_best());
        log::info!(
            "generation budget of {} exhausted, best fitness {fitness:.3}",
            self.config.max_generations
        );
        SearchOutcome::Exhausted {
            generations: self.generation,
            best_fitness: fitness,
            solution,
        }
    }

    fn current_best(&self) -> Snapshot {
        let fitness = self.population.evaluate_fitness(self.config.board_size);
        let (index, fitness) = fitness
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0.0), |best, (index, value)| {
                if value >= best.1 { (index, value) } else { best }
            });
        Snapshot {
            fitness,
            solution: self.population.solution(index).clone(),
        }
    }

    fn apply_operators(&mut self, fitness: &[f64], stats: &FitnessStats) {
        let rates = AdaptiveRates::from_stats(stats);
        let cell_count = self.config.cell_count();
        let population_size = self.population.len();

        for (index, &value) in fitness.iter().enumerate() {
            match rates.replacement(value) {
                Replacement::Reset => self.reset(index),
                Replacement::ResetWithProbability(p) => {
                    if chance(&mut self.rng, p) {
                        self.reset(index);
                    }
                }
                Replacement::Keep => {}
            }

            if rates.is_elite(value) && chance(&mut self.rng, ELITE_SKIP_PROBABILITY) {
                continue;
            }

            if chance(&mut self.rng, rates.mutation_rate) {
                let target = self.rng.random_range(0..population_size);
                genes::mutate(
                    self.population.solution_mut(target),
                    cell_count,
                    &mut self.rng,
                );
            }

            if chance(&mut self.rng, rates.crossover_rate) {
                let point = self.rng.random_range(0..self.config.queens);
                let child = genes::crossover(
                    self.population.solution(stats.best_index),
                    self.population.solution(stats.runner_up_index),
                    point,
                );
                *self.population.solution_mut(index) = child;
            }

            if chance(&mut self.rng, rates.new_random_rate) {
                self.reset(index);
            }
        }
    }

    fn reset(&mut self, index: usize) {
        log::trace!("generation {}: reset individual {index}", self.generation);
        *self.population.solution_mut(index) =
            genes::random(&mut self.rng, self.config.queens, self.config.cell_count());
    }
}

/// Draws `uniform[0, 1) <= probability`.
fn chance<R>(rng: &mut R, probability: f64) -> bool
where
    R: Rng + ?Sized,
{
    rng.random::<f64>() <= probability
}

/// Runs a full search for `config`, seeded with `seed`.
pub fn search<O>(
    config: SearchConfig,
    seed: SearchSeed,
    observer: &mut O,
) -> Result<SearchOutcome, ConfigError>
where
    O: GenerationObserver + ?Sized,
{
    let mut evolver = Evolver::new(config, seed.rng())?;
    Ok(evolver.run(observer))
}
