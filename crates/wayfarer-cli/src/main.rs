//! Command-line frontend for the Wayfarer fiction runtime.

mod commands;
mod world;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wayfarer",
    about = "A small interactive fiction runtime",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the bundled station world
    Play {
        /// Run these commands instead of reading stdin
        #[arg(short = 'c', long = "command")]
        commands: Vec<String>,
    },

    /// Print a scripted tour of the bundled world
    Demo,

    /// Export the bundled world as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { commands: script } => commands::play::run(&script),
        Commands::Demo => commands::demo::run(),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
