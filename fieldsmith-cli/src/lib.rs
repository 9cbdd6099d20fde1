//! Fieldsmith terminal host: argument parsing and the interactive session.

pub mod cli;
pub mod session;

pub use cli::{Cli, SessionCommand, SessionLine};
pub use session::{Outcome, Session};
