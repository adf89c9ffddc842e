// strata-core/src/infrastructure/config/profiles.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::profile::ProfileDocument;
use crate::infrastructure::error::InfrastructureError;

/// Loads the connection profile document from `profiles_dir`.
///
/// This is the only place the profile document touches the filesystem; every
/// operation downstream works on the returned in-memory value.
#[instrument(skip(profiles_dir))]
pub fn load_profiles(profiles_dir: &Path) -> Result<ProfileDocument, InfrastructureError> {
    let profiles_path = find_profiles_file(profiles_dir)?;
    info!(path = ?profiles_path, "Loading connection profiles");

    let content = fs::read_to_string(&profiles_path).map_err(InfrastructureError::Io)?;
    let document: ProfileDocument =
        serde_yaml::from_str(&content).map_err(InfrastructureError::YamlError)?;

    Ok(document)
}

// Support yml/yaml
fn find_profiles_file(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["profiles.yml", "profiles.yaml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ProfilesNotFound(format!(
        "No profiles file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}
