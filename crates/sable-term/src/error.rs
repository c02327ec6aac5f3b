//! Terminal front-end errors.

use sable_core::{CellParseError, PlacementError};

/// Errors that can occur while reading and parsing front-end commands.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// A command was given fewer arguments than it needs.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that was cut short.
        command: &'static str,
    },

    /// A cell argument was not an algebraic cell name.
    #[error(transparent)]
    InvalidCell(#[from] CellParseError),

    /// A numeric argument could not be parsed.
    #[error("invalid value for {param}: {value}")]
    InvalidNumber {
        /// Which argument was being parsed.
        param: &'static str,
        /// The rejected text.
        value: String,
    },

    /// The `position` command is missing `startpos` or `placement`.
    #[error("malformed position command: missing startpos or placement keyword")]
    MalformedPosition,

    /// The placement string in a `position` command is invalid.
    #[error("invalid placement: {source}")]
    InvalidPlacement {
        /// The underlying placement error.
        #[from]
        source: PlacementError,
    },

    /// The side-to-move code in a `position` command is not `w` or `b`.
    #[error("invalid side to move: {found}")]
    InvalidSide {
        /// The rejected code.
        found: String,
    },

    /// `setoption` did not follow the `name <N> value <V>` shape.
    #[error("malformed setoption command")]
    MalformedOption,

    /// `setoption` named an option this front end does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// A layout cell size of zero would put every pixel in one cell.
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
