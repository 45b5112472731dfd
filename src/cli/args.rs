//! Command line argument parsing for the Tapis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tapis - an Indonesian hate-speech text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "tapis")]
#[command(about = "Classify short Indonesian sentences as Netral, Agama, or Ras")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TapisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the model artifact
    #[arg(short, long, default_value = "model.json", env = "TAPIS_MODEL")]
    pub model: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TapisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a sentence
    Classify(ClassifyArgs),

    /// Show model artifact information
    Info(InfoArgs),
}

/// Arguments for the classify command.
#[derive(clap::Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Text to classify; reads standard input when omitted
    pub text: Vec<String>,

    /// Emit the full prediction as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the info command.
#[derive(clap::Args, Debug, Clone)]
pub struct InfoArgs {
    /// Include offline evaluation metrics when the artifact carries them
    #[arg(long)]
    pub metrics: bool,
}
