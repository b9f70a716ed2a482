//! Command-line interface for the konane binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kōnane - Hawaiian checkers in the terminal
#[derive(Parser, Debug)]
#[command(name = "konane")]
#[command(about = "Play Kōnane (Hawaiian checkers) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "konane.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on a terminal board
    Play,

    /// Feed a sequence of cell clicks to a new game and print the result
    Replay {
        /// Cells to interact with, as `row,col` (0-based)
        #[arg(required = true, value_name = "ROW,COL")]
        positions: Vec<konane::Position>,
    },

    /// Print the preview board shown before a game starts
    Preview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_positions() {
        let cli = Cli::try_parse_from(["konane", "replay", "0,0", "0,1", "2,0"]).unwrap();
        match cli.command {
            Command::Replay { positions } => {
                assert_eq!(positions.len(), 3);
                assert_eq!(positions[2], konane::Position::new(2, 0).unwrap());
            }
            other => panic!("Expected replay, got {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from("konane.toml"));
    }

    #[test]
    fn test_replay_rejects_off_board_position() {
        assert!(Cli::try_parse_from(["konane", "replay", "8,8"]).is_err());
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["konane", "play", "--config", "other.toml"]).unwrap();
        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }
}
