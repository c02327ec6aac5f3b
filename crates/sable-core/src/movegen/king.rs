//! King candidate generation. No castling and no check filtering.

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::piece::Piece;

use super::step_cells;

/// The eight neighbouring cells.
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

/// King candidates: every adjacent on-board cell that is empty or holds an opponent.
pub fn king_cells(piece: Piece, board: &Board) -> CellSet {
    step_cells(piece, board, &KING_OFFSETS)
}
