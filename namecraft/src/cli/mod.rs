//! Command-line front end: argument parsing and command execution.

mod args;
mod commands;

pub use args::{Cli, Commands, GenerateArgs};
pub use commands::{execute, run_round};
