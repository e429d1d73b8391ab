//! CLI module for rollcall
//!
//! Provides command-line interface for:
//! - serve: Build the record store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, validate_config};
pub use errors::{CliError, CliErrorCode, CliResult};
