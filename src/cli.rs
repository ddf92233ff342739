use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "license-attribution")]
#[command(about = "Generate a consolidated third-party license attribution file")]
#[command(version)]
pub struct Cli {
    /// Running without a subcommand generates the attribution file
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the attribution file
    Generate {
        /// Output file (default: THIRD_PARTY_LIBRARY_LICENSES)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a summary of the chosen licenses
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}
