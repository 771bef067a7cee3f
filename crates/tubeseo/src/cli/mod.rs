//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tubeseo binary.

mod commands;
mod handlers;

pub use commands::Cli;
pub use handlers::{exit_code_for, handle_command, load_config};
