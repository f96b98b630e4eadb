//! Command-line interface
//!
//! [`args`] turns tokens into [`CliOptions`]; [`commands`] drives a run and
//! prints the notices.

pub mod args;
pub mod commands;

pub use args::{help_text, parse_cli_args, CliOptions};
pub use commands::run_cli;
