// strata/src/commands/list.rs
//
// USE CASE: List every data source the profile document yields,
// optionally filtered by kind.

use std::path::Path;
use std::str::FromStr;

use comfy_table::Table;
use strata_core::application::{by_kind, convert_all};
use strata_core::domain::source::{DataSource, SourceKind};
use strata_core::infrastructure::config::load_profiles;

pub fn execute(profiles_dir: &Path, kind: Option<String>, format: String) -> anyhow::Result<()> {
    let document = load_profiles(profiles_dir)?;

    let sources = match kind.as_deref() {
        Some(kind) => {
            // An unknown kind is not an error (the filter just matches
            // nothing), but it usually means a typo. Warn and carry on.
            if SourceKind::from_str(kind).is_err() {
                eprintln!("⚠️  '{}' names no known source kind.", kind);
            }
            by_kind(Some(&document), kind)?
        }
        None => convert_all(Some(&document))?,
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&sources)?);
        }
        "table" => {
            let mut table = Table::new();
            table.set_header(vec!["Kind", "Location", "Database / Format"]);

            for source in &sources {
                match source {
                    DataSource::Postgres(ds) => {
                        table.add_row(vec![
                            source.kind().to_string(),
                            format!("{}:{}", ds.host, ds.port),
                            ds.database.clone(),
                        ]);
                    }
                    DataSource::LocalFile(ds) => {
                        table.add_row(vec![
                            source.kind().to_string(),
                            ds.url.clone(),
                            ds.format.clone(),
                        ]);
                    }
                }
            }

            println!("{table}");
            println!("📝 {} data source(s).", sources.len());
        }
        other => anyhow::bail!("Unknown output format '{}'. Use 'table' or 'json'.", other),
    }

    Ok(())
}
