//! Error types for cell parsing, placement parsing, and move execution.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;

/// A string that is not an algebraic cell name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell: \"{input}\"")]
pub struct CellParseError {
    /// The rejected input.
    pub input: String,
}

/// Errors that occur when parsing a placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement does not have exactly 8 rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    BadRowLength {
        /// Rank of the offending row (0 = first row in the string).
        rank: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    InvalidChar {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRowCount { found } => {
                write!(f, "expected 8 rows in placement, found {found}")
            }
            PlacementError::BadRowLength { rank, length } => {
                write!(f, "row {rank} describes {length} cells, expected 8")
            }
            PlacementError::InvalidChar { character } => {
                write!(f, "invalid placement character: '{character}'")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// A move that violates the preconditions of [`Board::execute`](crate::board::Board::execute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The board does not hold the given piece on the cell it claims.
    #[error("no such piece on {cell}")]
    NotOnBoard {
        /// The cell the piece claimed to stand on.
        cell: Cell,
    },
    /// Source and destination are the same cell.
    #[error("piece on {cell} cannot move onto itself")]
    NullMove {
        /// The cell in question.
        cell: Cell,
    },
    /// The destination holds a piece of the mover's own color.
    #[error("{color} piece already on {cell}")]
    FriendlyFire {
        /// The destination cell.
        cell: Cell,
        /// The mover's color.
        color: Color,
    },
}
