use std::{io::Write as _, path::PathBuf};

use anyhow::{Context as _, bail};
use nqueens_engine::Solution;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DecodeArg {
    /// Board width
    #[arg(short = 'n', long, required_unless_present = "record")]
    board_size: Option<usize>,
    /// Search record written by `solve --output`
    #[arg(long, conflicts_with_all = ["board_size", "genes"])]
    record: Option<PathBuf>,
    /// Free-position ordinals, one per queen, in decode order
    #[arg(required_unless_present = "record")]
    genes: Vec<usize>,
}

pub(crate) fn run(arg: &DecodeArg) -> anyhow::Result<()> {
    let (solution, board_size, expect_solved) = match (&arg.record, arg.board_size) {
        (Some(path), _) => {
            let record = util::read_record_file(path)?;
            (record.solution, record.config.board_size, Some(record.solved))
        }
        (None, Some(board_size)) => (Solution::from(arg.genes.clone()), board_size, None),
        (None, None) => bail!("either --board-size or --record is required"),
    };

    let decoded = solution.decode(board_size);
    if let Some(solved) = expect_solved
        && solved != decoded.is_solved()
    {
        bail!("search record claims solved={solved} but its genes decode otherwise");
    }

    let mut output = Output::stdout();
    let mut print = || -> std::io::Result<()> {
        writeln!(output, "Genes: {:?}", solution.genes())?;
        writeln!(
            output,
            "Placed: {}/{} (fitness {:.3})",
            decoded.placed(),
            decoded.queens(),
            decoded.fitness()
        )?;
        let queens = decoded
            .board()
            .queen_positions()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>();
        writeln!(output, "Queens: {}", queens.join(" "))?;
        write!(output, "{}", decoded.board())?;
        output.flush()
    };
    print().context("Failed to write decoded board to stdout")?;

    Ok(())
}
