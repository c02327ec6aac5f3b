//! Pawn candidate generation: pushes and diagonal captures. No en passant, no promotion.

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::piece::Piece;

/// Pawn candidates.
///
/// - one step forward onto an empty cell;
/// - two steps forward from the starting rank when both cells are empty;
/// - one step diagonally forward onto an opponent piece.
pub fn pawn_cells(piece: Piece, board: &Board) -> CellSet {
    let color = piece.color();
    let from = piece.position();
    let forward = color.forward();
    let mut cells = CellSet::EMPTY;

    // --- Pushes ---
    if let Some(one) = from.offset(0, forward).filter(|&c| board.is_vacant(c)) {
        cells.insert(one);
        if from.rank() == color.pawn_rank() {
            if let Some(two) = from.offset(0, 2 * forward).filter(|&c| board.is_vacant(c)) {
                cells.insert(two);
            }
        }
    }

    // --- Captures ---
    for df in [-1, 1] {
        if let Some(target) = from.offset(df, forward) {
            if board.color_at(target) == Some(color.flip()) {
                cells.insert(target);
            }
        }
    }

    cells
}
