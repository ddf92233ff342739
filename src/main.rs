use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_config, handle_generate};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Plain invocation generates the attribution file with defaults
        None => handle_generate(None, cli.quiet, false),
        Some(Commands::Generate { output, verbose }) => {
            handle_generate(output, cli.quiet, verbose)
        }
        Some(Commands::Config { show, validate }) => handle_config(show, validate),
    }
}
