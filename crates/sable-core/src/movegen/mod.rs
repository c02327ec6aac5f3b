//! Candidate-move generation: one pure rule per piece kind.
//!
//! Rules are purely geometric. They look at occupancy only and never ask
//! whether the mover's own king would be left exposed.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::cell::Cell;
use crate::cell_set::CellSet;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

pub use self::king::king_cells;
pub use self::knights::knight_cells;
pub use self::pawns::pawn_cells;
pub use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, slide_cells};

/// Return every cell `piece` may move to on `board`.
pub fn candidate_cells(piece: Piece, board: &Board) -> CellSet {
    let cells = match piece.kind() {
        PieceKind::Pawn => pawn_cells(piece, board),
        PieceKind::Rook => slide_cells(piece, board, &ROOK_DIRECTIONS),
        PieceKind::Bishop => slide_cells(piece, board, &BISHOP_DIRECTIONS),
        PieceKind::Queen => slide_cells(piece, board, &QUEEN_DIRECTIONS),
        PieceKind::Knight => knight_cells(piece, board),
        PieceKind::King => king_cells(piece, board),
    };
    trace!(piece = ?piece, count = cells.count(), "computed candidates");
    cells
}

/// Cells reached by single jumps of `offsets` that land on the board and not
/// on a piece of the mover's own color. Shared by the knight and king rules.
fn step_cells(piece: Piece, board: &Board, offsets: &[(i8, i8)]) -> CellSet {
    let from = piece.position();
    offsets
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| is_open_to(piece, board, to))
        .collect()
}

/// Return `true` if `to` is empty or holds an opponent of `piece`.
#[inline]
fn is_open_to(piece: Piece, board: &Board, to: Cell) -> bool {
    board.color_at(to) != Some(piece.color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn cell(file: u8, rank: u8) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn starting_position_has_twenty_candidate_moves_per_side() {
        let board = Board::starting_position();
        for color in Color::ALL {
            let total: u32 = board
                .pieces(color)
                .map(|piece| candidate_cells(piece, &board).count())
                .sum();
            assert_eq!(total, 20, "{color} should have 16 pawn and 4 knight moves");
        }
    }

    #[test]
    fn dispatch_matches_kind_rule() {
        let board: Board = "8/8/8/3q4/8/8/8/8".parse().unwrap();
        let queen = board.occupant_at(cell(3, 3)).unwrap();
        let as_rook = slide_cells(queen, &board, &ROOK_DIRECTIONS);
        let as_bishop = slide_cells(queen, &board, &BISHOP_DIRECTIONS);
        assert_eq!(candidate_cells(queen, &board), as_rook | as_bishop);
        assert_eq!(candidate_cells(queen, &board).count(), 27);
    }

    #[test]
    fn step_cells_skip_friends_and_edges() {
        let board: Board = "8/8/8/8/8/8/8/KR6".parse().unwrap();
        let king = board.occupant_at(cell(0, 7)).unwrap();
        let cells = step_cells(king, &board, &[(1, 0), (0, 1), (-1, 0), (0, -1)]);
        assert_eq!(cells, cell(0, 6).set());
    }
}
