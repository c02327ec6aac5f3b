//! Whole-board checks of the candidate rules.
//!
//! Every kind of piece of either color is dropped on every cell of a handful
//! of fixed positions, and the generated candidates are checked against the
//! rules they must obey.

use sable_core::movegen::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use sable_core::{Board, Cell, CellSet, Color, Piece, PieceKind, candidate_cells};

const POSITIONS: [&str; 5] = [
    "8/8/8/8/8/8/8/8",
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    "pPpPpPpP/PpPpPpPp/8/3nN3/3Bb3/8/pPpPpPpP/PpPpPpPp",
];

const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (-1, 2), (-2, 1), (-1, -2), (-2, -1), (1, -2), (2, -1)];

const KING_OFFSETS: [(i8, i8); 8] =
    [(0, 1), (1, 0), (0, -1), (-1, 0), (1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Every (board, piece) pair obtained by dropping `kind` of `color` on each cell.
fn drops(kind: PieceKind, color: Color) -> Vec<(Board, Piece)> {
    let mut out = Vec::new();
    for placement in POSITIONS {
        let base: Board = placement.parse().unwrap();
        for cell in Cell::all() {
            let mut board = base.clone();
            let piece = Piece::new(kind, color, cell);
            board.place(piece);
            out.push((board, piece));
        }
    }
    out
}

fn assert_ray_prefix(board: &Board, piece: Piece, cells: CellSet, directions: &[(i8, i8)]) {
    let mut seen = 0;
    for &(df, dr) in directions {
        let mut blocked = false;
        let mut cursor = piece.position();
        while let Some(next) = cursor.offset(df, dr) {
            let expected = if blocked {
                false
            } else {
                match board.color_at(next) {
                    None => true,
                    Some(color) => {
                        blocked = true;
                        color != piece.color()
                    }
                }
            };
            assert_eq!(
                cells.contains(next),
                expected,
                "{piece:?} on {board:?}: wrong membership for {next}"
            );
            if expected {
                seen += 1;
            }
            cursor = next;
        }
    }
    assert_eq!(cells.count(), seen, "{piece:?} produced cells off its rays");
}

fn expected_steps(board: &Board, piece: Piece, offsets: &[(i8, i8)]) -> CellSet {
    offsets
        .iter()
        .filter_map(|&(df, dr)| piece.position().offset(df, dr))
        .filter(|&c| board.color_at(c) != Some(piece.color()))
        .collect()
}

#[test]
fn never_lands_on_own_piece() {
    for kind in PieceKind::ALL {
        for color in Color::ALL {
            for (board, piece) in drops(kind, color) {
                for cell in candidate_cells(piece, &board) {
                    assert_ne!(board.color_at(cell), Some(color), "{piece:?} -> {cell}");
                    assert_ne!(cell, piece.position());
                }
            }
        }
    }
}

#[test]
fn slider_rays_are_contiguous_prefixes() {
    let cases = [
        (PieceKind::Rook, &ROOK_DIRECTIONS[..]),
        (PieceKind::Bishop, &BISHOP_DIRECTIONS[..]),
        (PieceKind::Queen, &QUEEN_DIRECTIONS[..]),
    ];
    for (kind, directions) in cases {
        for color in Color::ALL {
            for (board, piece) in drops(kind, color) {
                let cells = candidate_cells(piece, &board);
                assert_ray_prefix(&board, piece, cells, directions);
            }
        }
    }
}

#[test]
fn knight_and_king_match_their_offsets() {
    for (kind, offsets) in [(PieceKind::Knight, KNIGHT_OFFSETS), (PieceKind::King, KING_OFFSETS)] {
        for color in Color::ALL {
            for (board, piece) in drops(kind, color) {
                let cells = candidate_cells(piece, &board);
                assert!(cells.count() <= 8);
                assert_eq!(cells, expected_steps(&board, piece, &offsets), "{piece:?}");
            }
        }
    }
}

#[test]
fn cornered_knight_has_at_most_two_moves() {
    for color in Color::ALL {
        for (board, piece) in drops(PieceKind::Knight, color) {
            let p = piece.position();
            let cornered = matches!((p.file(), p.rank()), (0 | 7, 0 | 7));
            if cornered {
                assert!(candidate_cells(piece, &board).count() <= 2);
            }
        }
    }
}

#[test]
fn pawn_rules_hold_everywhere() {
    for color in Color::ALL {
        for (board, piece) in drops(PieceKind::Pawn, color) {
            let cells = candidate_cells(piece, &board);
            let from = piece.position();
            let fwd = color.forward();

            let one = from.offset(0, fwd);
            let one_open = one.is_some_and(|c| board.is_vacant(c));
            if let Some(one) = one {
                assert_eq!(cells.contains(one), one_open, "{piece:?} single push");
            }

            if let Some(two) = from.offset(0, 2 * fwd) {
                let expected =
                    from.rank() == color.pawn_rank() && one_open && board.is_vacant(two);
                assert_eq!(cells.contains(two), expected, "{piece:?} double push");
            }

            for df in [-1, 1] {
                if let Some(diag) = from.offset(df, fwd) {
                    let expected = board.color_at(diag) == Some(color.flip());
                    assert_eq!(cells.contains(diag), expected, "{piece:?} capture {diag}");
                }
            }

            assert!(cells.count() <= 4);
        }
    }
}
