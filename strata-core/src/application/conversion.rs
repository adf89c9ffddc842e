// strata-core/src/application/conversion.rs

use crate::domain::error::DomainError;
use crate::domain::profile::ProfileDocument;
use crate::domain::source::DataSource;
use crate::error::StrataError;
use tracing::debug;

/// Converts every target of every profile into a data source descriptor.
///
/// Records with an unsupported type tag contribute nothing and are not an
/// error; the result may be empty for a well-formed document. Output order
/// follows map iteration and is not a guarantee.
pub fn convert_all(document: Option<&ProfileDocument>) -> Result<Vec<DataSource>, StrataError> {
    let document = document.ok_or(DomainError::MissingDocument)?;

    let mut sources = Vec::new();
    for (profile_name, profile) in &document.profiles {
        for (target_name, record) in &profile.outputs {
            match DataSource::from_record(record) {
                Some(source) => sources.push(source),
                None => debug!(
                    profile = %profile_name,
                    target = %target_name,
                    connection_type = %record.record_type,
                    "Skipping unsupported connection type"
                ),
            }
        }
    }

    Ok(sources)
}
