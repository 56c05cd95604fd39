//! Command implementations.

pub mod check;
pub mod command;

pub use check::CheckCommand;
pub use command::{Command, CommandResult};
