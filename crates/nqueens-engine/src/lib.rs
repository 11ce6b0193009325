//! Board model and genome decoding for the N-queens genetic search.
//!
//! A candidate placement is not stored as absolute coordinates. Each gene of a
//! [`Solution`] is a *free-position ordinal*: the rank of a cell among the cells
//! that are still free when that gene is decoded. Decoding walks the genes in
//! order, placing a queen on the selected free cell and covering every cell it
//! attacks, so later genes index into an ever-shrinking set of free cells.
//!
//! # Example
//!
//! ```
//! use nqueens_engine::Solution;
//!
//! let solution = Solution::from(vec![1, 1, 0, 0]);
//! let decoded = solution.decode(4);
//! assert_eq!(decoded.placed(), 4);
//! assert_eq!(decoded.fitness(), 1.0);
//! assert!(decoded.board().is_conflict_free());
//! ```

pub use self::{core::*, seed::*};

pub mod core;
pub mod seed;

/// A gene's free-position ordinal has no matching free cell on the board.
///
/// Raised by [`Board::place`] and absorbed by the decoder, which simply does not
/// count a queen for that gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no free cell at ordinal {ordinal} ({free_cells} free cells remaining)")]
pub struct PlacementUnavailable {
    /// The requested free-position ordinal.
    pub ordinal: usize,
    /// Number of free cells on the board when the placement was attempted.
    pub free_cells: usize,
}
