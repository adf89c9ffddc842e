// strata-core/src/domain/source/local_file.rs

use crate::domain::profile::ConnectionRecord;
use serde::Serialize;
use std::path::Path;
use validator::Validate;

/// Descriptor for a file-backed engine (DuckDB, ...). `url` is the directory
/// holding the database file; `format` echoes the record's type tag so the
/// downstream engine knows which reader to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate, Default)]
pub struct LocalFileDataSource {
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: String,

    #[validate(length(min = 1, message = "format cannot be empty"))]
    pub format: String,
}

impl LocalFileDataSource {
    pub fn from_record(record: &ConnectionRecord) -> Self {
        let path = record.path.clone().unwrap_or_default();

        // Directory component of the file path. A bare filename has no
        // directory component and yields the empty string.
        let url = Path::new(&path)
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            url,
            format: record.record_type.clone(),
        }
    }
}
