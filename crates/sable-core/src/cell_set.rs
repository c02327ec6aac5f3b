//! Sets of cells packed into a 64-bit word, one bit per cell.

use std::fmt;
use std::ops::BitOr;

use crate::cell::Cell;

/// A set of cells. Bit `i` is set when the cell with index `i` is a member.
///
/// This is the type of every candidate set. Iteration yields cells in index
/// order, but callers must not rely on any particular order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u64);

impl CellSet {
    /// The empty set.
    pub const EMPTY: CellSet = CellSet(0);

    /// Create a set from a raw `u64`.
    #[inline]
    pub const fn new(bits: u64) -> CellSet {
        CellSet(bits)
    }

    /// Return `true` if the set has no members.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of members.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `cell` is a member.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        (self.0 & (1u64 << cell.index())) != 0
    }

    /// Return a new set with `cell` added.
    #[inline]
    pub const fn with(self, cell: Cell) -> CellSet {
        CellSet(self.0 | (1u64 << cell.index()))
    }

    /// Add `cell` in place.
    #[inline]
    pub fn insert(&mut self, cell: Cell) {
        self.0 |= 1u64 << cell.index();
    }

    /// Iterate over the members without consuming the set.
    #[inline]
    pub fn iter(self) -> CellSet {
        self
    }
}

impl BitOr for CellSet {
    type Output = CellSet;
    #[inline]
    fn bitor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 | rhs.0)
    }
}

impl Iterator for CellSet {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            let cell = Cell::from_index_unchecked(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(cell)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for CellSet {}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> CellSet {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl fmt::Display for CellSet {
    /// Space-separated algebraic cells in index order, e.g. `a3 c3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cell in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{cell}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::CellSet;
    use crate::cell::Cell;

    fn cell(file: u8, rank: u8) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn empty_set() {
        assert!(CellSet::EMPTY.is_empty());
        assert_eq!(CellSet::EMPTY.count(), 0);
        assert_eq!(CellSet::default(), CellSet::EMPTY);
    }

    #[test]
    fn with_and_contains() {
        let set = CellSet::EMPTY.with(cell(4, 4));
        assert!(set.contains(cell(4, 4)));
        assert!(!set.contains(cell(3, 4)));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = CellSet::EMPTY;
        set.insert(cell(0, 0));
        set.insert(cell(0, 0));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn iterates_every_member_once() {
        let set = CellSet::EMPTY.with(cell(7, 7)).with(cell(0, 0)).with(cell(3, 5));
        let cells: Vec<_> = set.iter().collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(set.len(), 3);
        assert_eq!(cells.into_iter().collect::<CellSet>(), set);
    }

    #[test]
    fn display_lists_algebraic_cells() {
        let set = CellSet::EMPTY.with(cell(0, 5)).with(cell(0, 4));
        assert_eq!(format!("{set}"), "a4 a3");
        assert_eq!(format!("{}", CellSet::EMPTY), "");
    }

    #[test]
    fn union() {
        let a = cell(1, 1).set() | cell(2, 2).set();
        assert_eq!(a.count(), 2);
        assert!(a.contains(cell(2, 2)));
        assert_eq!(a | cell(2, 2).set(), a);
    }
}
