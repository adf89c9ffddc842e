// strata/src/commands/resolve.rs
//
// USE CASE: Resolve the active target of a profile and print the
// descriptor the query engine would receive.

use std::path::Path;

use strata_core::application::{ActiveTargetQuery, resolve_active};
use strata_core::infrastructure::config::load_profiles;

pub fn execute(profiles_dir: &Path, profile: String, target: Option<String>) -> anyhow::Result<()> {
    let document = load_profiles(profiles_dir)?;

    let query = ActiveTargetQuery {
        registry: None,
        profile,
        target,
    };
    let sources = resolve_active(Some(&document), &query)?;

    match sources.first() {
        Some(source) => println!("{}", serde_json::to_string_pretty(source)?),
        None => {
            // Resolution succeeded but the record's type is not a supported
            // engine; there is nothing to hand to the downstream consumer.
            eprintln!("⚠️  Active target has an unsupported connection type; nothing to register.");
        }
    }

    Ok(())
}
