//! CLI argument definitions using clap
//!
//! Commands:
//! - tvsettings screen --config <path> [--screen about|reset-options]
//! - tvsettings session --config <path> [--screen ...] [--real-clock]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// TV settings screens driven against an emulated device
#[derive(Parser, Debug)]
#[command(name = "tvsettings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Which screen to open
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    About,
    ResetOptions,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the visible rows of a screen and exit
    Screen {
        /// Path to the device profile
        #[arg(long, default_value = "./device.json")]
        config: PathBuf,

        #[arg(long, value_enum, default_value_t = ScreenKind::About)]
        screen: ScreenKind,
    },

    /// Drive a screen with JSON-lines commands on stdin
    Session {
        /// Path to the device profile
        #[arg(long, default_value = "./device.json")]
        config: PathBuf,

        #[arg(long, value_enum, default_value_t = ScreenKind::About)]
        screen: ScreenKind,

        /// Time taps with the system monotonic clock instead of `at_ms`
        #[arg(long)]
        real_clock: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_args() {
        let cli = Cli::parse_from([
            "tvsettings",
            "session",
            "--config",
            "tv.json",
            "--screen",
            "reset-options",
        ]);
        match cli.command {
            Command::Session {
                config,
                screen,
                real_clock,
            } => {
                assert_eq!(config, PathBuf::from("tv.json"));
                assert_eq!(screen, ScreenKind::ResetOptions);
                assert!(!real_clock);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_screen_defaults_to_about() {
        let cli = Cli::parse_from(["tvsettings", "screen"]);
        match cli.command {
            Command::Screen { screen, .. } => assert_eq!(screen, ScreenKind::About),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
