//! Placement strings: the piece-placement field of FEN, read row by row from rank 0.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::PlacementError;
use crate::piece::Piece;

/// Placement string for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Build a board from a placement string such as [`STARTING_PLACEMENT`].
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != usize::from(Cell::SIDE) {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file: usize = 0;
            for c in row.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidChar { character: c });
                    }
                    file += digit as usize;
                    continue;
                }

                let cell = u8::try_from(file)
                    .ok()
                    .zip(u8::try_from(rank).ok())
                    .and_then(|(f, r)| Cell::new(f, r))
                    .ok_or(PlacementError::BadRowLength {
                        rank,
                        length: file + 1,
                    })?;
                let piece =
                    Piece::from_letter(c, cell).ok_or(PlacementError::InvalidChar { character: c })?;
                board.place(piece);
                file += 1;
            }

            if file != usize::from(Cell::SIDE) {
                return Err(PlacementError::BadRowLength { rank, length: file });
            }
        }

        Ok(board)
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        Board::from_placement(placement)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0u8..Cell::SIDE {
            let mut empty_run = 0u8;
            for file in 0u8..Cell::SIDE {
                match Cell::new(file, rank).and_then(|cell| self.occupant_at(cell)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank < Cell::SIDE - 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
