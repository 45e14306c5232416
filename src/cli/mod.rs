//! CLI Module
//!
//! Command-line interface for building and running SoX effect chains.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// soxfx - typed SoX effect chains
#[derive(Parser, Debug)]
#[command(name = "soxfx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the supported effect names
    #[command(name = "effects")]
    Effects,

    /// Render a chain file to SoX effect arguments
    #[command(name = "render")]
    Render {
        /// Path to the chain file
        chain: PathBuf,

        /// Print a JSON array instead of one token per line
        #[arg(long)]
        json: bool,
    },

    /// Print the full SoX command line for a chain file
    #[command(name = "command")]
    Command {
        /// Path to the chain file
        chain: PathBuf,

        /// Input audio files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output audio file; output is discarded when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run SoX with a chain file
    #[command(name = "run")]
    Run {
        /// Path to the chain file
        chain: PathBuf,

        /// Input audio files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output audio file; output is discarded when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command() {
        let cli = Cli::parse_from([
            "soxfx",
            "command",
            "chain.json",
            "a.wav",
            "b.wav",
            "-o",
            "out.wav",
        ]);
        match cli.command {
            Commands::Command {
                chain,
                inputs,
                output,
            } => {
                assert_eq!(chain, PathBuf::from("chain.json"));
                assert_eq!(inputs.len(), 2);
                assert_eq!(output, Some(PathBuf::from("out.wav")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_requires_input() {
        assert!(Cli::try_parse_from(["soxfx", "run", "chain.json"]).is_err());
    }
}
