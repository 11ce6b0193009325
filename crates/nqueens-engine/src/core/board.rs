use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PlacementUnavailable;

/// State of a single board cell.
///
/// Cells only ever move away from [`Cell::Free`]: a free cell becomes either a
/// queen or covered, and neither state is ever undone during a decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
#[repr(u8)]
pub enum Cell {
    /// Not attacked and not occupied.
    #[default]
    Free,
    /// Holds a placed queen.
    Queen,
    /// Attacked by a placed queen; never eligible for placement again.
    Covered,
}

impl Cell {
    fn as_char(self) -> char {
        match self {
            Cell::Free => ' ',
            Cell::Queen => 'q',
            Cell::Covered => '.',
        }
    }
}

/// Absolute board coordinate, `x` is the column and `y` the row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if a queen on `self` attacks `other`.
    ///
    /// Shares a row, a column, or either diagonal. A position does attack itself.
    #[must_use]
    pub fn attacks(self, other: Position) -> bool {
        self.x == other.x
            || self.y == other.y
            || self.x.abs_diff(other.x) == self.y.abs_diff(other.y)
    }
}

/// An N×N grid of cells, scanned in row-major order.
///
/// # Example
///
/// ```
/// use nqueens_engine::{Board, Cell, Position};
///
/// let mut board = Board::new(4);
/// let pos = board.place(1).unwrap();
/// assert_eq!(pos, Position::new(1, 0));
/// assert_eq!(board.cell(pos), Cell::Queen);
/// assert_eq!(board.cell(Position::new(0, 0)), Cell::Covered);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board where every cell is [`Cell::Free`].
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![Cell::Free; width * width],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`width²`), the exclusive upper bound of a gene.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        assert!(pos.x < self.width && pos.y < self.width, "{pos} is off the board");
        self.cells[pos.y * self.width + pos.x]
    }

    /// Returns an iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells that are still free.
    #[must_use]
    pub fn free_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_free()).count()
    }

    /// Positions of all placed queens in row-major order.
    pub fn queen_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_queen())
            .map(|(index, _)| self.position_of(index))
    }

    /// Returns `true` if no two placed queens attack each other.
    #[must_use]
    pub fn is_conflict_free(&self) -> bool {
        let queens = self.queen_positions().collect::<Vec<_>>();
        queens
            .iter()
            .enumerate()
            .all(|(i, a)| queens[i + 1..].iter().all(|b| !a.attacks(*b)))
    }

    /// Places a queen on the free cell ranked `ordinal` among the currently free
    /// cells (row-major order), then covers every cell it attacks.
    ///
    /// On failure the board is left untouched.
    pub fn place(&mut self, ordinal: usize) -> Result<Position, PlacementUnavailable> {
        let index = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_free())
            .nth(ordinal)
            .map(|(index, _)| index)
            .ok_or_else(|| PlacementUnavailable {
                ordinal,
                free_cells: self.free_cells(),
            })?;

        let origin = self.position_of(index);
        self.cover_attacked(origin);
        self.cells[index] = Cell::Queen;
        Ok(origin)
    }

    // Row, column and both diagonals through `origin`, clipped to the board.
    // Queens are never overwritten.
    fn cover_attacked(&mut self, origin: Position) {
        let width = self.width;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let pos = Position::new(index % width, index / width);
            if *cell != Cell::Queen && origin.attacks(pos) {
                *cell = Cell::Covered;
            }
        }
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_free() {
        let board = Board::new(5);
        assert_eq!(board.width(), 5);
        assert_eq!(board.cell_count(), 25);
        assert_eq!(board.free_cells(), 25);
        assert_eq!(board.queen_positions().count(), 0);
    }

    #[test]
    fn test_place_first_free_cell() {
        let mut board = Board::new(4);
        assert_eq!(board.place(0), Ok(Position::new(0, 0)));
        assert_eq!(board.cell(Position::new(0, 0)), Cell::Queen);
    }

    #[test]
    fn test_place_covers_lines_and_diagonals() {
        let mut board = Board::new(5);
        // ordinal 12 on an empty 5x5 board is the centre
        let center = board.place(12).unwrap();
        assert_eq!(center, Position::new(2, 2));

        for y in 0..5 {
            for x in 0..5 {
                let pos = Position::new(x, y);
                let expected = if pos == center {
                    Cell::Queen
                } else if center.attacks(pos) {
                    Cell::Covered
                } else {
                    Cell::Free
                };
                assert_eq!(board.cell(pos), expected, "unexpected state at {pos}");
            }
        }
        assert_eq!(board.free_cells(), 8);
    }

    #[test]
    fn test_place_clips_diagonals_at_edges() {
        let mut board = Board::new(4);
        let corner = board.place(3).unwrap();
        assert_eq!(corner, Position::new(3, 0));
        // anti-diagonal from the top right corner
        for pos in [Position::new(2, 1), Position::new(1, 2), Position::new(0, 3)] {
            assert_eq!(board.cell(pos), Cell::Covered);
        }
        assert_eq!(board.cell(Position::new(0, 1)), Cell::Free);
        assert_eq!(board.free_cells(), 6);
    }

    #[test]
    fn test_ordinal_counts_only_free_cells() {
        let mut board = Board::new(4);
        board.place(0).unwrap();
        // Free cells after (0,0): (2,1) (3,1) (1,2) (3,2) (1,3) (2,3)
        assert_eq!(board.free_cells(), 6);
        assert_eq!(board.place(1), Ok(Position::new(3, 1)));
    }

    #[test]
    fn test_place_out_of_range_fails_without_marking() {
        let mut board = Board::new(4);
        board.place(0).unwrap();
        let before = board.clone();

        let err = board.place(6).unwrap_err();
        assert_eq!(
            err,
            PlacementUnavailable {
                ordinal: 6,
                free_cells: 6
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_empty_board_bounds() {
        let mut board = Board::new(3);
        assert!(board.place(9).is_err());
        assert_eq!(board.place(8), Ok(Position::new(2, 2)));
    }

    #[test]
    fn test_queens_are_never_covered() {
        let mut board = Board::new(6);
        let mut placed = vec![];
        while let Ok(pos) = board.place(0) {
            placed.push(pos);
        }
        assert!(placed.len() > 1);
        for pos in placed {
            assert_eq!(board.cell(pos), Cell::Queen);
        }
        assert!(board.is_conflict_free());
    }

    #[test]
    fn test_attacks() {
        let origin = Position::new(1, 2);
        assert!(origin.attacks(Position::new(1, 0)));
        assert!(origin.attacks(Position::new(3, 2)));
        assert!(origin.attacks(Position::new(0, 1)));
        assert!(origin.attacks(Position::new(3, 0)));
        assert!(origin.attacks(Position::new(0, 3)));
        assert!(!origin.attacks(Position::new(2, 0)));
        assert!(!origin.attacks(Position::new(3, 3)));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(4);
        board.place(1).unwrap();
        assert_eq!(board.to_string(), ".q..\n... \n . .\n .  \n");
    }
}
