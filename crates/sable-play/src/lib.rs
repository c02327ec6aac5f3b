//! Turn and selection handling on top of the sable rule engine.

pub mod controller;
pub mod selection;

pub use controller::{ClickOutcome, SelectionController};
pub use selection::Selection;
