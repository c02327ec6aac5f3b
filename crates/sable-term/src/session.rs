//! Line-oriented terminal session driving a [`SelectionController`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info, trace, warn};

use sable_core::{CellSet, Piece};
use sable_play::{ClickOutcome, SelectionController};

use crate::command::{Command, TermOption, parse_command};
use crate::error::TermError;
use crate::layout::{HitMask, InsetMask, Layout};

/// Snapshot of the settings adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermConfig {
    /// Pixel geometry used by `press`.
    pub layout: Layout,
    /// Border of the built-in inset mask, or `None` while a custom hit mask
    /// is installed.
    pub hit_margin: Option<u32>,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            hit_margin: Some(0),
        }
    }
}

/// The glyph hit test in force. `HitMargin` only adjusts the built-in one.
enum ActiveMask {
    Inset(InsetMask),
    Custom(Box<dyn HitMask>),
}

impl ActiveMask {
    fn hits(&self, piece: Piece, offset_x: u32, offset_y: u32, cell_size: u32) -> bool {
        match self {
            ActiveMask::Inset(mask) => mask.hits(piece, offset_x, offset_y, cell_size),
            ActiveMask::Custom(mask) => mask.hits(piece, offset_x, offset_y, cell_size),
        }
    }
}

/// A terminal front end: owns one game and reads commands until `quit` or end of input.
pub struct Session {
    game: SelectionController,
    layout: Layout,
    mask: ActiveMask,
}

impl Session {
    /// Create a session on a new game with the default layout.
    pub fn new() -> Self {
        Self {
            game: SelectionController::new(),
            layout: Layout::default(),
            mask: ActiveMask::Inset(InsetMask::default()),
        }
    }

    /// Replace the glyph hit test used by `press`. `HitMargin` has no effect
    /// on a custom mask.
    pub fn with_hit_mask(mut self, mask: impl HitMask + 'static) -> Self {
        self.mask = ActiveMask::Custom(Box::new(mask));
        self
    }

    pub fn game(&self) -> &SelectionController {
        &self.game
    }

    pub fn config(&self) -> TermConfig {
        let hit_margin = match &self.mask {
            ActiveMask::Inset(mask) => Some(mask.margin),
            ActiveMask::Custom(_) => None,
        };
        TermConfig {
            layout: self.layout,
            hit_margin,
        }
    }

    /// Run on stdin and stdout.
    pub fn run(self) -> Result<(), TermError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run on any line source and sink, handling one command to completion
    /// before reading the next.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), TermError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.dispatch(cmd, &mut out)?,
                Err(e) => warn!(error = %e, "command rejected"),
            }
            out.flush()?;
        }

        info!("sable session closing");
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::NewGame => self.game.reset(),
            Command::Position { board, turn } => {
                self.game = SelectionController::with_board(board, turn);
            }
            Command::Click(cell) => {
                let outcome = self.game.handle_click(cell);
                writeln!(out, "{}", describe(&outcome))?;
            }
            Command::ClickCoords(file, rank) => {
                let outcome = self.game.handle_click_coords(file, rank);
                writeln!(out, "{}", describe(&outcome))?;
            }
            Command::Press(x, y) => {
                let outcome = self.press(x, y);
                writeln!(out, "{}", describe(&outcome))?;
            }
            Command::SetOption(option) => self.set_option(option),
            Command::Show => {
                let hints = self.game.candidate_cells_for_selection();
                writeln!(out, "{}", self.game.board().pretty_with_hints(hints))?;
                writeln!(out, "turn {}", self.game.current_turn())?;
            }
            Command::Hints => {
                let hints = self.game.candidate_cells_for_selection();
                writeln!(out, "hints {}", hint_list(hints))?;
            }
            Command::Turn => writeln!(out, "turn {}", self.game.current_turn())?,
            Command::Unknown(word) if !word.is_empty() => debug!(%word, "unknown command"),
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn set_option(&mut self, option: TermOption) {
        match option {
            TermOption::OriginX(x) => self.layout.origin_x = x,
            TermOption::OriginY(y) => self.layout.origin_y = y,
            TermOption::CellSize(size) => self.layout.cell_size = size.max(1),
            TermOption::HitMargin(margin) => match &mut self.mask {
                ActiveMask::Inset(mask) => mask.margin = margin,
                ActiveMask::Custom(_) => {
                    warn!(margin, "HitMargin ignored while a custom hit mask is installed");
                    return;
                }
            },
        }
        debug!(config = ?self.config(), "option updated");
    }

    /// Resolve a pixel press and feed it to the game.
    ///
    /// Presses on a candidate cell always go through, so captures work no
    /// matter where inside the target cell the press lands. A press on any
    /// other occupied cell must hit the piece glyph; a miss drops the
    /// selection without consulting the game.
    pub fn press(&mut self, x: i32, y: i32) -> ClickOutcome {
        let Some(hit) = self.layout.locate(x, y) else {
            debug!(x, y, "press outside the board");
            return ClickOutcome::OutOfRange;
        };

        if self.game.candidate_cells_for_selection().contains(hit.cell) {
            return self.game.handle_click(hit.cell);
        }

        if let Some(piece) = self.game.board().occupant_at(hit.cell) {
            let size = self.layout.cell_size;
            if !self.mask.hits(piece, hit.offset_x, hit.offset_y, size) {
                trace!(cell = %hit.cell, "press missed the glyph");
                return if self.game.clear_selection() {
                    ClickOutcome::Deselected
                } else {
                    ClickOutcome::Ignored
                };
            }
        }

        self.game.handle_click(hit.cell)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// One-line response for a click outcome.
pub fn describe(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Selected { piece, candidates } => {
            format!("selected {} hints {}", piece.position(), hint_list(*candidates))
        }
        ClickOutcome::Moved {
            from,
            to,
            captured: Some(taken),
            ..
        } => format!("moved {from} {to} captures {taken}"),
        ClickOutcome::Moved { from, to, .. } => format!("moved {from} {to}"),
        ClickOutcome::Deselected => "deselected".to_string(),
        ClickOutcome::Ignored => "ignored".to_string(),
        ClickOutcome::OutOfRange => "out of range".to_string(),
    }
}

fn hint_list(hints: CellSet) -> String {
    if hints.is_empty() {
        "none".to_string()
    } else {
        hints.to_string()
    }
}
