//! Piece values: kind, color, where the piece stands, and whether it is still in play.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;
use crate::piece_kind::PieceKind;

/// One piece on (or captured from) the board.
///
/// A piece keeps its kind and color for the whole game; only its position
/// changes when it moves, and `alive` is cleared once it is captured.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Cell,
    alive: bool,
}

impl Piece {
    /// Create a live piece standing on `position`.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: Cell) -> Piece {
        Piece {
            kind,
            color,
            position,
            alive: true,
        }
    }

    /// Parse a placement letter: uppercase for White, lowercase for Black.
    pub fn from_letter(c: char, position: Cell) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, position))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The cell the piece stands on, or stood on when it was captured.
    #[inline]
    pub const fn position(self) -> Cell {
        self.position
    }

    #[inline]
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Placement letter for this piece.
    pub fn letter(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Same piece relocated to `cell`.
    #[inline]
    pub(crate) const fn moved_to(self, cell: Cell) -> Piece {
        Piece {
            position: cell,
            ..self
        }
    }

    /// Same piece marked as taken.
    #[inline]
    pub(crate) const fn captured(self) -> Piece {
        Piece {
            alive: false,
            ..self
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter(), self.position)?;
        if !self.alive {
            f.write_str(" (captured)")?;
        }
        Ok(())
    }
}
