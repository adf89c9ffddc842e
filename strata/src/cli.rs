// strata/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Profile-driven data source resolution for the Strata query engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📋 Lists the data sources derived from the profile document
    List {
        /// Directory containing profiles.yml
        #[arg(long, default_value = ".")]
        profiles_dir: PathBuf,

        /// Keep only sources of this kind (ex: "postgres", "local_file")
        #[arg(long, short)]
        kind: Option<String>,

        /// Output format: table | json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 🎯 Resolves the active target of one profile to a descriptor
    Resolve {
        /// Directory containing profiles.yml
        #[arg(long, default_value = ".")]
        profiles_dir: PathBuf,

        /// Profile name (top-level key of profiles.yml)
        #[arg(long, short)]
        profile: String,

        /// Target name; defaults to the profile's declared target
        #[arg(long, short)]
        target: Option<String>,
    },

    /// ✅ Validates every data source derived from the profile document
    Validate {
        /// Directory containing profiles.yml
        #[arg(long, default_value = ".")]
        profiles_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_list_defaults() -> Result<()> {
        let args = Cli::parse_from(["strata", "list"]);
        match args.command {
            Commands::List {
                profiles_dir,
                kind,
                format,
            } => {
                assert_eq!(profiles_dir.to_string_lossy(), ".");
                assert_eq!(kind, None);
                assert_eq!(format, "table");
                Ok(())
            }
            _ => bail!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_list_kind_filter() -> Result<()> {
        let args = Cli::parse_from(["strata", "list", "--kind", "postgres", "--format", "json"]);
        match args.command {
            Commands::List { kind, format, .. } => {
                assert_eq!(kind, Some("postgres".to_string()));
                assert_eq!(format, "json");
                Ok(())
            }
            _ => bail!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_resolve() -> Result<()> {
        let args = Cli::parse_from([
            "strata",
            "resolve",
            "--profile",
            "analytics",
            "--target",
            "prod",
        ]);
        match args.command {
            Commands::Resolve {
                profile,
                target,
                profiles_dir,
            } => {
                assert_eq!(profile, "analytics");
                assert_eq!(target, Some("prod".to_string()));
                assert_eq!(profiles_dir.to_string_lossy(), ".");
                Ok(())
            }
            _ => bail!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_parse_validate() -> Result<()> {
        let args = Cli::parse_from(["strata", "validate", "--profiles-dir", "/tmp"]);
        match args.command {
            Commands::Validate { profiles_dir } => {
                assert_eq!(profiles_dir.to_string_lossy(), "/tmp");
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }
}
