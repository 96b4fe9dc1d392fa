//! CLI module for tvsettings
//!
//! Provides command-line interface for:
//! - screen: open a screen against a device profile and print its rows
//! - session: drive a screen with JSON-lines requests

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ScreenKind};
pub use commands::{run, run_command, serve, session, show_screen, Session, SessionRequest};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_requests, write_error, write_response};
