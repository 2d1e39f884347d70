//! Command-line interface.
//!
//! Client commands talk to a running media service through its bus proxy;
//! `serve` is handled by the binary itself.

mod args;
mod commands;
pub mod formatting;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use args::{Cli, Commands, ConfigCommands};
pub use service::CliService;
pub use types::{CliError, Command, CommandResult};
