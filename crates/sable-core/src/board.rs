//! The board: sole owner of which piece stands on which cell.

use std::fmt;

use tracing::debug;

use crate::cell::Cell;
use crate::cell_set::CellSet;
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// 8×8 occupancy grid. Each cell holds at most one piece, and a piece is
/// stored in exactly the cell named by its own position.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each cell, indexed by [`Cell::index()`].
    cells: [Option<Piece>; Cell::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Cell::COUNT],
        }
    }

    /// Return the standard starting position: 32 pieces, Black on ranks 0-1,
    /// White on ranks 6-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(PieceKind::BACK_ROW) {
                board.place_at(file, color.back_rank(), kind, color);
                board.place_at(file, color.pawn_rank(), PieceKind::Pawn, color);
            }
        }
        board
    }

    fn place_at(&mut self, file: u8, rank: u8, kind: PieceKind, color: Color) {
        if let Some(cell) = Cell::new(file, rank) {
            self.place(Piece::new(kind, color, cell));
        }
    }

    /// Put `piece` on its own position, returning whatever stood there before.
    ///
    /// Intended for setting up positions; during play, pieces only move
    /// through [`Board::execute`].
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let cell = piece.position();
        self.cells[cell.index()].replace(piece)
    }

    /// Return the piece on `cell`, if any.
    #[inline]
    pub fn occupant_at(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index()]
    }

    /// Return the color of the piece on `cell`, if any.
    #[inline]
    pub fn color_at(&self, cell: Cell) -> Option<Color> {
        self.cells[cell.index()].map(Piece::color)
    }

    /// Return `true` if no piece stands on `cell`.
    #[inline]
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Iterate over the pieces of one side.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.cells
            .iter()
            .flatten()
            .copied()
            .filter(move |piece| piece.color() == color)
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Return `true` if the board holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move `piece` to `dest`, capturing any opponent piece standing there.
    ///
    /// The source cell is cleared and `dest` receives the piece with its
    /// position updated, in one step. Returns the captured piece, if any, with
    /// its `alive` flag cleared. On error the board is left untouched.
    pub fn execute(&mut self, piece: Piece, dest: Cell) -> Result<Option<Piece>, MoveError> {
        let src = piece.position();
        if self.occupant_at(src) != Some(piece) {
            return Err(MoveError::NotOnBoard { cell: src });
        }
        if src == dest {
            return Err(MoveError::NullMove { cell: src });
        }
        if self.color_at(dest) == Some(piece.color()) {
            return Err(MoveError::FriendlyFire {
                cell: dest,
                color: piece.color(),
            });
        }

        self.cells[src.index()] = None;
        let captured = self.cells[dest.index()]
            .replace(piece.moved_to(dest))
            .map(Piece::captured);

        debug!(%src, %dest, piece = %piece, captured = ?captured, "executed move");
        Ok(captured)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            hints: CellSet::EMPTY,
        }
    }

    /// Like [`Board::pretty`], marking `hints` with `*` (empty) or `x` (capture).
    pub fn pretty_with_hints(&self, hints: CellSet) -> PrettyBoard<'_> {
        PrettyBoard { board: self, hints }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    hints: CellSet,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0u8..Cell::SIDE {
            write!(f, "{}  ", Cell::SIDE - rank)?;
            for file in 0u8..Cell::SIDE {
                let Some(cell) = Cell::new(file, rank) else {
                    continue;
                };
                let c = match (self.board.occupant_at(cell), self.hints.contains(cell)) {
                    (Some(_), true) => 'x',
                    (Some(piece), false) => piece.letter(),
                    (None, true) => '*',
                    (None, false) => '.',
                };
                if file < Cell::SIDE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
