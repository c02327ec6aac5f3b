//! Board cells addressed by (file, rank).

use std::fmt;
use std::str::FromStr;

use crate::cell_set::CellSet;
use crate::error::CellParseError;

/// One of the 64 cells of the board.
///
/// Files run 0..7 left to right, ranks run 0..7 top to bottom: rank 0 holds
/// Black's back row and rank 7 holds White's. Stored as `rank * 8 + file`, so
/// every value of this type is in range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Total number of cells.
    pub const COUNT: usize = 64;

    /// Cells per side of the board.
    pub const SIDE: u8 = 8;

    /// Create a cell from a file and rank, returning `None` if either is out of range.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Cell> {
        if file < Self::SIDE && rank < Self::SIDE {
            Some(Cell(rank * Self::SIDE + file))
        } else {
            None
        }
    }

    /// Create a cell from signed coordinates, as produced by offset arithmetic
    /// or an unvalidated caller.
    #[inline]
    pub fn try_from_coords(file: i32, rank: i32) -> Option<Cell> {
        let file = u8::try_from(file).ok()?;
        let rank = u8::try_from(rank).ok()?;
        Cell::new(file, rank)
    }

    /// Create a cell from an index known to be below 64.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Cell {
        debug_assert!(index < 64);
        Cell(index)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file (column), 0..7.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Return the rank (row), 0..7.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Return the cell `df` files and `dr` ranks away, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Cell> {
        Cell::try_from_coords(
            i32::from(self.file()) + i32::from(df),
            i32::from(self.rank()) + i32::from(dr),
        )
    }

    /// Return a set containing only this cell.
    #[inline]
    pub const fn set(self) -> CellSet {
        CellSet::new(1u64 << self.0)
    }

    /// Parse algebraic notation such as `"e2"`; file `a` is 0, digit `8` is rank 0.
    pub fn from_algebraic(s: &str) -> Option<Cell> {
        let &[file_byte, rank_byte] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }
        Cell::new(file_byte - b'a', b'8' - rank_byte)
    }

    /// Iterate over all 64 cells, row by row from the top-left.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0u8..64).map(Cell)
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Cell, CellParseError> {
        Cell::from_algebraic(s).ok_or_else(|| CellParseError { input: s.to_string() })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let digit = (b'8' - self.rank()) as char;
        write!(f, "{file}{digit}")
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {} = {})", self.file(), self.rank(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn new_and_accessors() {
        let cell = Cell::new(4, 6).unwrap();
        assert_eq!(cell.file(), 4);
        assert_eq!(cell.rank(), 6);
        assert_eq!(cell.index(), 52);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Cell::new(8, 0).is_none());
        assert!(Cell::new(0, 8).is_none());
        assert!(Cell::try_from_coords(-1, 3).is_none());
        assert!(Cell::try_from_coords(3, 8).is_none());
        assert!(Cell::try_from_coords(i32::MAX, 0).is_none());
    }

    #[test]
    fn file_rank_roundtrip() {
        for cell in Cell::all() {
            assert_eq!(Cell::new(cell.file(), cell.rank()), Some(cell));
        }
        assert_eq!(Cell::all().count(), Cell::COUNT);
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Cell::new(0, 0).unwrap();
        assert_eq!(corner.offset(1, 2), Cell::new(1, 2));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        let far = Cell::new(7, 7).unwrap();
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(-7, -7), Some(corner));
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Cell::from_algebraic("a1"), Cell::new(0, 7));
        assert_eq!(Cell::from_algebraic("a8"), Cell::new(0, 0));
        assert_eq!(Cell::from_algebraic("e2"), Cell::new(4, 6));
        assert_eq!(Cell::from_algebraic("h8"), Cell::new(7, 0));
        assert_eq!(format!("{}", Cell::new(4, 4).unwrap()), "e4");
        assert_eq!(format!("{}", Cell::new(0, 7).unwrap()), "a1");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Cell::from_algebraic("i1").is_none());
        assert!(Cell::from_algebraic("a9").is_none());
        assert!(Cell::from_algebraic("a0").is_none());
        assert!(Cell::from_algebraic("").is_none());
        assert!(Cell::from_algebraic("a1b").is_none());
        assert!("z3".parse::<Cell>().is_err());
    }

    #[test]
    fn debug_shows_both_forms() {
        assert_eq!(format!("{:?}", Cell::new(0, 6).unwrap()), "Cell(0, 6 = a2)");
    }
}
