// strata-core/src/domain/source/mod.rs

pub mod kind;
pub mod local_file;
pub mod postgres;

pub use kind::SourceKind;
pub use local_file::LocalFileDataSource;
pub use postgres::PostgresDataSource;

use crate::domain::error::DomainError;
use crate::domain::profile::ConnectionRecord;
use serde::Serialize;
use validator::Validate;

// Type tags that resolve to a LocalFileDataSource. New file-backed engines
// are added here; the dispatch contract below does not change.
const FILE_BACKED_TYPES: [&str; 1] = ["duckdb"];

/// Validated, downstream-consumable descriptor produced from one connection
/// record. Serializes with a `type` tag so the query engine receives
/// `{"type":"postgres",...}` / `{"type":"local_file",...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DataSource {
    Postgres(PostgresDataSource),
    LocalFile(LocalFileDataSource),
}

impl DataSource {
    /// Converts one connection record, dispatching on its type tag.
    ///
    /// Unsupported tags produce `None`: absence, not an error. Bulk
    /// conversion stays total because of this.
    pub fn from_record(record: &ConnectionRecord) -> Option<Self> {
        match record.record_type.as_str() {
            "postgres" => Some(Self::Postgres(PostgresDataSource::from_record(record))),
            tag if FILE_BACKED_TYPES.contains(&tag) => {
                Some(Self::LocalFile(LocalFileDataSource::from_record(record)))
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Postgres(_) => SourceKind::Postgres,
            Self::LocalFile(_) => SourceKind::LocalFile,
        }
    }

    /// Field-level checks for this descriptor. Side-effect free; may be
    /// called any number of times.
    pub fn validate(&self) -> Result<(), DomainError> {
        let checked = match self {
            Self::Postgres(ds) => ds.validate(),
            Self::LocalFile(ds) => ds.validate(),
        };

        checked.map_err(|errors| DomainError::InvalidDataSource {
            kind: self.kind(),
            reason: flatten_messages(&errors),
        })
    }
}

// validator reports per-field; on aplatit en une phrase lisible et stable.
fn flatten_messages(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
