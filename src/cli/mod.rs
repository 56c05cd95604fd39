//! Command-line interface for doclinks.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli};
pub use commands::{CheckCommand, Command, CommandResult};
