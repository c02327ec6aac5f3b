//! Core rule-engine types: cells, pieces, the occupancy board, and candidate-move generation.

mod board;
mod cell;
mod cell_set;
mod color;
mod error;
pub mod movegen;
mod piece;
mod piece_kind;
mod placement;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use cell_set::CellSet;
pub use color::Color;
pub use error::{CellParseError, MoveError, PlacementError};
pub use movegen::candidate_cells;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
