use clap::{Parser, Subcommand};

use self::{decode::DecodeArg, solve::SolveArg};

mod decode;
mod solve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Search for a non-attacking placement with the genetic algorithm
    Solve(#[clap(flatten)] SolveArg),
    /// Decode a genome (or a saved search record) and print its board
    Decode(#[clap(flatten)] DecodeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Solve(SolveArg::default())) {
        Mode::Solve(arg) => solve::run(&arg)?,
        Mode::Decode(arg) => decode::run(&arg)?,
    }
    Ok(())
}
