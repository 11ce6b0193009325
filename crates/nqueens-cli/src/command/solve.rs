use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use nqueens_engine::SearchSeed;
use nqueens_training::{
    config::SearchConfig,
    evolution::{self, GenerationReport},
};

use crate::{
    schema::search_record::SearchRecord,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SolveArg {
    /// JSON search configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Board width and queen count at once
    #[arg(short = 'n', long)]
    size: Option<usize>,
    /// Number of queens (genome length)
    #[arg(long)]
    queens: Option<usize>,
    /// Board width
    #[arg(long)]
    board_size: Option<usize>,
    /// Number of individuals
    #[arg(long)]
    population_size: Option<usize>,
    /// Generation budget
    #[arg(long)]
    max_generations: Option<usize>,
    /// Seed as up to 16 hex digits [default: derived from the clock]
    #[arg(long)]
    seed: Option<SearchSeed>,
    /// Output file for the JSON search record [default: stdout]
    #[arg(long)]
    output: Option<PathBuf>,
    /// Do not print per-generation progress
    #[arg(long, short)]
    quiet: bool,
}

pub(crate) fn run(arg: &SolveArg) -> anyhow::Result<()> {
    let config = resolve_config(arg)?;
    config.validate().context("Invalid search configuration")?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    log::debug!("resolved search configuration: {config:?}");

    eprintln!(
        "Searching {} queens on a {n}x{n} board (population {}, up to {} generations, seed {seed})",
        config.queens,
        config.population_size,
        config.max_generations,
        n = config.board_size,
    );

    let quiet = arg.quiet;
    let outcome = evolution::search(config.clone(), seed, &mut |report: &GenerationReport| {
        if !quiet {
            print_report(report);
        }
    })?;

    let decoded = outcome.solution().decode(config.board_size);
    eprintln!();
    if outcome.is_solved() {
        eprintln!("Found fitness 1 in generation {}", outcome.generation());
    } else {
        eprintln!(
            "No solution after {} generations, best fitness {:.3}",
            outcome.generation(),
            outcome.best_fitness()
        );
    }
    eprintln!("  Genes: {:?}", outcome.solution().genes());
    eprintln!("  Placed: {}/{}", decoded.placed(), decoded.queens());
    eprint!("{}", decoded.board());

    let record = SearchRecord::new(seed, config, &outcome);
    Output::save_json(&record, arg.output.clone())?;
    if let Some(path) = &arg.output {
        eprintln!("Search record saved to {}", path.display());
    }

    Ok(())
}

fn print_report(report: &GenerationReport) {
    let stats = &report.stats;
    eprintln!(
        "Generation #{}: total={:.3} average={:.4} best={:.3} next-best={:.3}",
        report.generation, stats.sum, stats.average, stats.best, stats.runner_up,
    );
}

fn resolve_config(arg: &SolveArg) -> anyhow::Result<SearchConfig> {
    let mut config = match &arg.config {
        Some(path) => util::read_config_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(size) = arg.size {
        config.queens = size;
        config.board_size = size;
    }
    let overrides = [
        (arg.queens, &mut config.queens),
        (arg.board_size, &mut config.board_size),
        (arg.population_size, &mut config.population_size),
        (arg.max_generations, &mut config.max_generations),
    ];
    for (value, field) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
    if arg.seed.is_some() {
        config.seed = arg.seed;
    }
    Ok(config)
}

fn clock_seed() -> SearchSeed {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros());
    SearchSeed::new(nanos.unsigned_abs())
}
