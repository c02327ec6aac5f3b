//! The piece a player is holding, with the cells it may move to.

use sable_core::{Board, Cell, CellSet, Piece, candidate_cells};

/// A selected piece together with its candidate cells, computed once when the
/// piece was picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    piece: Piece,
    candidates: CellSet,
}

impl Selection {
    /// Select `piece` and compute its candidates on `board`.
    pub fn new(piece: Piece, board: &Board) -> Selection {
        Selection {
            piece,
            candidates: candidate_cells(piece, board),
        }
    }

    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Cells the selected piece may move to. May be empty.
    #[inline]
    pub fn candidates(&self) -> CellSet {
        self.candidates
    }

    /// Return `true` if clicking `cell` completes a move.
    #[inline]
    pub fn allows(&self, cell: Cell) -> bool {
        self.candidates.contains(cell)
    }
}
