use serde::{Deserialize, Serialize};

use super::board::Board;

/// A genome: one free-position ordinal per queen, decoded in order.
///
/// Genes are not validated when a solution is built. An ordinal that exceeds the
/// number of free cells at its turn simply fails to place during [`Self::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    genes: Vec<usize>,
}

impl From<Vec<usize>> for Solution {
    fn from(genes: Vec<usize>) -> Self {
        Self { genes }
    }
}

impl FromIterator<usize> for Solution {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl Solution {
    #[must_use]
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Mutable access to the genes. The length stays fixed.
    pub fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Decodes the genome on a fresh `board_size`×`board_size` board.
    ///
    /// Every gene is attempted even after an earlier one fails to place. The
    /// result depends only on the genes and `board_size`.
    #[must_use]
    pub fn decode(&self, board_size: usize) -> Decoded {
        let mut board = Board::new(board_size);
        let mut placed = 0;
        for &ordinal in &self.genes {
            if board.place(ordinal).is_ok() {
                placed += 1;
            }
        }
        Decoded {
            board,
            placed,
            queens: self.genes.len(),
        }
    }

    /// Fraction of queens placed when decoding; `1.0` is a valid solution.
    #[must_use]
    pub fn fitness(&self, board_size: usize) -> f64 {
        self.decode(board_size).fitness()
    }
}

/// The board realised by decoding a [`Solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    board: Board,
    placed: usize,
    queens: usize,
}

impl Decoded {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Number of genes that produced a queen.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Number of genes in the decoded solution.
    #[must_use]
    pub fn queens(&self) -> usize {
        self.queens
    }

    /// `placed / queens`, in `[0, 1]`. An empty genome scores `0.0`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fitness(&self) -> f64 {
        if self.queens == 0 {
            return 0.0;
        }
        self.placed as f64 / self.queens as f64
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.queens > 0 && self.placed == self.queens
    }
}
