//! The turn/selection state machine.
//!
//! The controller is either idle or holding one piece of the side to move
//! together with that piece's candidate cells. Every click goes through
//! [`SelectionController::handle_click`]:
//!
//! - a click on a cached candidate executes the move, flips the turn, and
//!   returns to idle;
//! - any other click is treated as a fresh pick: a piece of the side to move
//!   becomes the new selection, anything else clears it.

use tracing::{debug, warn};

use sable_core::{Board, Cell, CellSet, Color, Piece};

use crate::selection::Selection;

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up.
    Selected {
        /// The selected piece.
        piece: Piece,
        /// Where it may go. May be empty.
        candidates: CellSet,
    },
    /// The selected piece moved and the turn passed to the other side.
    Moved {
        /// The piece as it stood before moving.
        piece: Piece,
        /// Source cell.
        from: Cell,
        /// Destination cell.
        to: Cell,
        /// Opponent piece removed from `to`, if any.
        captured: Option<Piece>,
    },
    /// A previous selection was dropped without moving.
    Deselected,
    /// Nothing was selected and nothing changed.
    Ignored,
    /// The click named a cell outside the board. Nothing changed.
    OutOfRange,
}

/// Owns the board, whose turn it is, and the current selection.
#[derive(Debug, Clone)]
pub struct SelectionController {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
}

impl SelectionController {
    /// A new game: standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary position with `turn` to move.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selection: None,
        }
    }

    /// Throw away the current game and start a new one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color allowed to make the next move.
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Candidate cells of the selected piece, or the empty set when idle.
    pub fn candidate_cells_for_selection(&self) -> CellSet {
        self.selection
            .map_or(CellSet::EMPTY, |selection| selection.candidates())
    }

    /// Drop the current selection, if any. Returns `true` if one was held.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Handle a click on `cell`.
    pub fn handle_click(&mut self, cell: Cell) -> ClickOutcome {
        if let Some(selection) = self.selection {
            if selection.allows(cell) {
                return self.complete_move(selection, cell);
            }
        }
        self.pick(cell)
    }

    /// Handle a click given as raw coordinates, ignoring anything off the board.
    pub fn handle_click_coords(&mut self, file: i32, rank: i32) -> ClickOutcome {
        match Cell::try_from_coords(file, rank) {
            Some(cell) => self.handle_click(cell),
            None => {
                debug!(file, rank, "click outside the board");
                ClickOutcome::OutOfRange
            }
        }
    }

    /// Treat `cell` as a fresh pick, replacing any selection.
    fn pick(&mut self, cell: Cell) -> ClickOutcome {
        let had_selection = self.clear_selection();
        match self.board.occupant_at(cell) {
            Some(piece) if piece.color() == self.turn => {
                let selection = Selection::new(piece, &self.board);
                debug!(%cell, piece = %piece, candidates = %selection.candidates(), "selected");
                self.selection = Some(selection);
                ClickOutcome::Selected {
                    piece,
                    candidates: selection.candidates(),
                }
            }
            _ if had_selection => {
                debug!(%cell, "selection cleared");
                ClickOutcome::Deselected
            }
            _ => ClickOutcome::Ignored,
        }
    }

    fn complete_move(&mut self, selection: Selection, to: Cell) -> ClickOutcome {
        let piece = selection.piece();
        self.selection = None;
        match self.board.execute(piece, to) {
            Ok(captured) => {
                self.turn = self.turn.flip();
                debug!(from = %piece.position(), %to, next = %self.turn, "move completed");
                ClickOutcome::Moved {
                    piece,
                    from: piece.position(),
                    to,
                    captured,
                }
            }
            Err(e) => {
                // Candidates are computed against the current board, so this
                // means the board changed underneath the selection.
                warn!(error = %e, "stale selection");
                ClickOutcome::Deselected
            }
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}
