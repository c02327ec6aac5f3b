//! Pointer geometry: mapping pixel presses onto board cells and piece glyphs.

use sable_core::{Cell, Piece};

/// Where the board sits on screen and how large each cell is, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Left edge of file 0.
    pub origin_x: i32,
    /// Top edge of rank 0.
    pub origin_y: i32,
    /// Width and height of one cell. Never zero.
    pub cell_size: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            cell_size: 100,
        }
    }
}

/// A press resolved to a cell plus its offset from that cell's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub cell: Cell,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl Layout {
    /// Resolve a pixel position, or `None` if it lies outside the board.
    pub fn locate(&self, x: i32, y: i32) -> Option<Hit> {
        let size = i64::from(self.cell_size.max(1));
        let dx = i64::from(x) - i64::from(self.origin_x);
        let dy = i64::from(y) - i64::from(self.origin_y);
        if dx < 0 || dy < 0 {
            return None;
        }

        let file = u8::try_from(dx / size).ok()?;
        let rank = u8::try_from(dy / size).ok()?;
        let cell = Cell::new(file, rank)?;
        Some(Hit {
            cell,
            offset_x: u32::try_from(dx % size).ok()?,
            offset_y: u32::try_from(dy % size).ok()?,
        })
    }
}

/// Decides whether a press inside an occupied cell touches the piece itself
/// rather than the padding around it.
pub trait HitMask {
    fn hits(&self, piece: Piece, offset_x: u32, offset_y: u32, cell_size: u32) -> bool;
}

/// The piece covers the cell minus a transparent border `margin` pixels wide.
/// A zero margin makes the whole cell the piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsetMask {
    pub margin: u32,
}

impl HitMask for InsetMask {
    fn hits(&self, _piece: Piece, offset_x: u32, offset_y: u32, cell_size: u32) -> bool {
        let far = cell_size.saturating_sub(self.margin);
        (self.margin..far).contains(&offset_x) && (self.margin..far).contains(&offset_y)
    }
}
