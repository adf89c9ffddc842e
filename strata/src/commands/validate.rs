// strata/src/commands/validate.rs
//
// USE CASE: Validate every data source the profile document yields;
// fail the process on the first invalid one.

use std::path::Path;

use miette::Report;
use strata_core::StrataError;
use strata_core::application::validate_all;
use strata_core::infrastructure::config::load_profiles;

pub fn execute(profiles_dir: &Path) -> anyhow::Result<()> {
    let document = load_profiles(profiles_dir)?;

    match validate_all(Some(&document)) {
        Ok(()) => {
            println!("✨ All data sources are valid.");
            Ok(())
        }
        Err(StrataError::Domain(error)) => {
            // Rendu riche (code + help) pour les erreurs de validation
            eprintln!("{:?}", Report::new(error));
            std::process::exit(1);
        }
        Err(other) => Err(other.into()),
    }
}
