//! drapa CLI — headless cloth simulation, validation, and inspection.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "drapa")]
#[command(version, about = "drapa — mass-spring cloth simulation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation from a scenario file.
    Simulate {
        /// Path to the scenario (TOML).
        #[arg(short, long, default_value = "scenarios/hanging_sheet.toml")]
        scenario: String,

        /// Write a binary state snapshot of the final frame.
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Validate a scenario file without running it.
    Validate {
        /// Path to the scenario (TOML).
        path: String,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to the snapshot.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { scenario, snapshot } => {
            commands::simulate(&scenario, snapshot.as_deref())
        }
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect { path } => commands::inspect(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
