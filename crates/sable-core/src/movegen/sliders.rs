//! Sliding piece (rook, bishop, queen) candidate generation.

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::piece::Piece;

/// Up, down, left, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// The four diagonals.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Orthogonals followed by diagonals.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

/// Walk each direction one cell at a time from the piece.
///
/// Empty cells are candidates. The first occupied cell ends the ray; it is a
/// candidate only if it holds an opponent.
pub fn slide_cells(piece: Piece, board: &Board, directions: &[(i8, i8)]) -> CellSet {
    let mut cells = CellSet::EMPTY;
    for &(df, dr) in directions {
        let mut cursor = piece.position();
        while let Some(next) = cursor.offset(df, dr) {
            match board.color_at(next) {
                None => cells.insert(next),
                Some(color) => {
                    if color != piece.color() {
                        cells.insert(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn cell(s: &str) -> Cell {
        Cell::from_algebraic(s).unwrap()
    }

    fn cells(names: &[&str]) -> CellSet {
        names.iter().map(|s| cell(s)).collect()
    }

    #[test]
    fn rook_boxed_in_at_start() {
        let board = Board::starting_position();
        let rook = board.occupant_at(cell("a1")).unwrap();
        assert!(slide_cells(rook, &board, &ROOK_DIRECTIONS).is_empty());
    }

    #[test]
    fn rook_stops_before_friend_and_on_enemy() {
        // Rook a1, own pawn a2 gone; own knight c1, black pawn a7.
        let board: Board = "8/p7/8/8/8/8/8/R1N5".parse().unwrap();
        let rook = board.occupant_at(cell("a1")).unwrap();
        let got = slide_cells(rook, &board, &ROOK_DIRECTIONS);
        assert_eq!(got, cells(&["b1", "a2", "a3", "a4", "a5", "a6", "a7"]));
    }

    #[test]
    fn bishop_on_empty_board() {
        let board: Board = "8/8/8/8/8/8/8/2B5".parse().unwrap();
        let bishop = board.occupant_at(cell("c1")).unwrap();
        let got = slide_cells(bishop, &board, &BISHOP_DIRECTIONS);
        assert_eq!(got.count(), 7);
        assert!(got.contains(cell("h6")));
        assert!(got.contains(cell("a3")));
    }

    #[test]
    fn bishop_capture_ends_ray() {
        let board: Board = "8/8/8/8/3p4/8/8/B7".parse().unwrap();
        let bishop = board.occupant_at(cell("a1")).unwrap();
        let got = slide_cells(bishop, &board, &BISHOP_DIRECTIONS);
        assert_eq!(got, cells(&["b2", "c3", "d4"]));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board: Board = "8/1p6/8/3Q4/8/5P2/8/8".parse().unwrap();
        let queen = board.occupant_at(cell("d5")).unwrap();
        let rook = slide_cells(queen, &board, &ROOK_DIRECTIONS);
        let bishop = slide_cells(queen, &board, &BISHOP_DIRECTIONS);
        assert_eq!(slide_cells(queen, &board, &QUEEN_DIRECTIONS), rook | bishop);
        assert!(bishop.contains(cell("b7")));
        assert!(!bishop.contains(cell("a8")));
        assert!(bishop.contains(cell("e4")));
        assert!(!bishop.contains(cell("f3")));
    }
}
