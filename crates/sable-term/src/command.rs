//! Line command parsing.

use sable_core::{Board, Cell, Color};

use crate::error::TermError;

/// A runtime setting changed with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOption {
    /// Horizontal pixel offset of the board.
    OriginX(i32),
    /// Vertical pixel offset of the board.
    OriginY(i32),
    /// Cell edge length in pixels.
    CellSize(u32),
    /// Transparent border around each piece glyph, in pixels.
    HitMargin(u32),
}

/// A parsed command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start a new game.
    NewGame,
    /// `position` -- load a position with the given side to move.
    Position {
        /// The board to play on.
        board: Board,
        /// Side to move.
        turn: Color,
    },
    /// `click <cell>` -- cell-level click given in algebraic notation.
    Click(Cell),
    /// `click <file> <rank>` -- cell-level click given as raw indices, not yet validated.
    ClickCoords(i32, i32),
    /// `press <x> <y>` -- pointer press in pixels.
    Press(i32, i32),
    /// `setoption name <N> value <V>`.
    SetOption(TermOption),
    /// `show` -- print the board with move hints.
    Show,
    /// `hints` -- print the candidate cells of the selection.
    Hints,
    /// `turn` -- print the side to move.
    Turn,
    /// `quit` -- leave the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, TermError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "new" => Ok(Command::NewGame),
        "show" => Ok(Command::Show),
        "hints" => Ok(Command::Hints),
        "turn" => Ok(Command::Turn),
        "quit" => Ok(Command::Quit),
        "click" => parse_click(args),
        "press" => {
            let x = parse_int(args.first(), "press", "x")?;
            let y = parse_int(args.get(1), "press", "y")?;
            Ok(Command::Press(x, y))
        }
        "position" => parse_position(args),
        "setoption" => parse_setoption(args),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// `click e2` or `click 4 6`.
fn parse_click(args: &[&str]) -> Result<Command, TermError> {
    match args {
        [] => Err(TermError::MissingArgument { command: "click" }),
        [name] => Ok(Command::Click(name.parse()?)),
        [file, rank, ..] => Ok(Command::ClickCoords(
            parse_int(Some(file), "click", "file")?,
            parse_int(Some(rank), "click", "rank")?,
        )),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [w|b]`
/// - `position placement <placement> [w|b]`
fn parse_position(args: &[&str]) -> Result<Command, TermError> {
    let (board, rest) = match args {
        ["startpos", rest @ ..] => (Board::starting_position(), rest),
        ["placement", placement, rest @ ..] => (Board::from_placement(placement)?, rest),
        _ => return Err(TermError::MalformedPosition),
    };

    let turn = match rest.first() {
        None => Color::White,
        Some(code) => Color::from_code(code).ok_or_else(|| TermError::InvalidSide {
            found: code.to_string(),
        })?,
    };

    Ok(Command::Position { board, turn })
}

/// Parse `setoption name <N> value <V>`. Option names are case-insensitive.
fn parse_setoption(args: &[&str]) -> Result<Command, TermError> {
    let ["name", name, "value", value] = args else {
        return Err(TermError::MalformedOption);
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "originx" => TermOption::OriginX(parse_int(Some(value), "setoption", "OriginX")?),
        "originy" => TermOption::OriginY(parse_int(Some(value), "setoption", "OriginY")?),
        "cellsize" => {
            let size = parse_int(Some(value), "setoption", "CellSize")?;
            if size == 0 {
                return Err(TermError::ZeroCellSize);
            }
            TermOption::CellSize(size)
        }
        "hitmargin" => TermOption::HitMargin(parse_int(Some(value), "setoption", "HitMargin")?),
        _ => {
            return Err(TermError::UnknownOption {
                name: name.to_string(),
            });
        }
    };

    Ok(Command::SetOption(option))
}

/// Parse an integer argument.
fn parse_int<T: std::str::FromStr>(
    token: Option<&&str>,
    command: &'static str,
    param: &'static str,
) -> Result<T, TermError> {
    let value = token.ok_or(TermError::MissingArgument { command })?;
    value.parse().map_err(|_| TermError::InvalidNumber {
        param,
        value: value.to_string(),
    })
}
