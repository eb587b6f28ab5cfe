//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Virtual Mouse - Control the cursor with hand gestures
#[derive(Parser, Debug)]
#[command(name = "virtual-mouse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a landmark trace through the gesture engine
    Replay {
        /// Input trace file
        #[arg(short, long)]
        input: PathBuf,

        /// Sensitivity preset (precise, responsive, beginner)
        #[arg(short, long)]
        preset: Option<String>,

        /// Screen width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Screen height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },

    /// Benchmark per-frame processing over a trace
    Bench {
        /// Input trace file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of passes over the trace
        #[arg(short, long, default_value = "10")]
        repeat: u32,
    },

    /// Write a synthetic demo trace for trying out replay
    Demo {
        /// Output trace file
        #[arg(short, long, default_value = "demo_trace.json")]
        output: PathBuf,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List available sensitivity presets
    Presets,

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "click_threshold")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "smoothing_factor")
        key: String,

        /// Value to set
        value: String,
    },

    /// Reset configuration to a preset's defaults
    Reset {
        /// Preset to reset to
        #[arg(short, long, default_value = "responsive")]
        preset: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the trace storage directory
    pub fn traces_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".virtual_mouse").join("traces"))
            .unwrap_or_else(|| PathBuf::from("traces"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traces_dir() {
        let dir = Cli::traces_dir();
        assert!(dir.to_string_lossy().contains("traces"));
    }

    #[test]
    fn test_cli_parse_replay_command_with_defaults() {
        let args = vec!["virtual-mouse", "replay", "--input", "trace.json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Replay { input, preset, width, height } => {
                assert_eq!(input, PathBuf::from("trace.json"));
                assert!(preset.is_none());
                assert_eq!(width, 1920);
                assert_eq!(height, 1080);
            }
            _ => panic!("Expected Replay command"),
        }
    }

    #[test]
    fn test_cli_parse_replay_command_with_all_options() {
        let args = vec![
            "virtual-mouse",
            "replay",
            "--input", "session.json",
            "--preset", "precise",
            "--width", "2560",
            "--height", "1440",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Replay { preset, width, height, .. } => {
                assert_eq!(preset.as_deref(), Some("precise"));
                assert_eq!(width, 2560);
                assert_eq!(height, 1440);
            }
            _ => panic!("Expected Replay command"),
        }
    }

    #[test]
    fn test_cli_parse_bench_command() {
        let args = vec![
            "virtual-mouse",
            "bench",
            "--input", "trace.json",
            "--repeat", "50",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Bench { input, repeat } => {
                assert_eq!(input, PathBuf::from("trace.json"));
                assert_eq!(repeat, 50);
            }
            _ => panic!("Expected Bench command"),
        }
    }

    #[test]
    fn test_cli_parse_config_set() {
        let args = vec!["virtual-mouse", "config", "set", "click_threshold", "0.05"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Config { action: ConfigAction::Set { key, value } } => {
                assert_eq!(key, "click_threshold");
                assert_eq!(value, "0.05");
            }
            _ => panic!("Expected Config Set command"),
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let args = vec!["virtual-mouse", "--verbose", "presets"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Presets));
    }

    #[test]
    fn test_cli_rejects_missing_input() {
        let args = vec!["virtual-mouse", "replay"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
