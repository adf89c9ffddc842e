// strata/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug strata list ... pour voir les détails
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: LIST DATA SOURCES ---
        Commands::List {
            profiles_dir,
            kind,
            format,
        } => commands::list::execute(&profiles_dir, kind, format)?,

        // --- USE CASE: RESOLVE ACTIVE TARGET ---
        Commands::Resolve {
            profiles_dir,
            profile,
            target,
        } => commands::resolve::execute(&profiles_dir, profile, target)?,

        // --- USE CASE: AGGREGATE VALIDATION ---
        Commands::Validate { profiles_dir } => commands::validate::execute(&profiles_dir)?,
    }

    Ok(())
}
