// strata-core/src/application/selection.rs

use crate::application::conversion::convert_all;
use crate::domain::profile::ProfileDocument;
use crate::domain::source::DataSource;
use crate::error::StrataError;

/// Converts the whole document and keeps only descriptors of the requested
/// kind. `kind` is matched against `DataSource::kind().as_str()`, so a string
/// naming no known kind simply yields an empty list.
pub fn by_kind(
    document: Option<&ProfileDocument>,
    kind: &str,
) -> Result<Vec<DataSource>, StrataError> {
    let sources = convert_all(document)?;
    Ok(sources
        .into_iter()
        .filter(|source| source.kind().as_str() == kind)
        .collect())
}
