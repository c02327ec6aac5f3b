//! Terminal front end for sable: a line protocol, pixel layout, and session loop.

pub mod command;
pub mod error;
pub mod layout;
pub mod session;

pub use command::{Command, TermOption, parse_command};
pub use error::TermError;
pub use layout::{Hit, HitMask, InsetMask, Layout};
pub use session::{Session, TermConfig, describe};
