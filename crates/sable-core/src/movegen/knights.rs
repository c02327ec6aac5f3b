//! Knight candidate generation.

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::piece::Piece;

use super::step_cells;

/// The eight L-shaped jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
    (1, -2),
    (2, -1),
];

/// Knight candidates: every on-board jump target that is empty or holds an opponent.
pub fn knight_cells(piece: Piece, board: &Board) -> CellSet {
    step_cells(piece, board, &KNIGHT_OFFSETS)
}
