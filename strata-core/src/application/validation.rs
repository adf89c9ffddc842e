// strata-core/src/application/validation.rs

use crate::domain::error::DomainError;
use crate::domain::profile::ProfileDocument;
use crate::domain::source::DataSource;
use crate::error::StrataError;

/// Converts every record and validates every resulting descriptor.
///
/// Fails fast on the first invalid descriptor, wrapping its validation error
/// annotated with the profile and target that produced it. Records with an
/// unsupported type are skipped, exactly as in conversion.
pub fn validate_all(document: Option<&ProfileDocument>) -> Result<(), StrataError> {
    let document = document.ok_or(DomainError::MissingDocument)?;

    for (profile_name, profile) in &document.profiles {
        for (target_name, record) in &profile.outputs {
            let Some(source) = DataSource::from_record(record) else {
                continue;
            };

            source
                .validate()
                .map_err(|error| DomainError::TargetValidation {
                    profile: profile_name.clone(),
                    target: target_name.clone(),
                    source: Box::new(error),
                })?;
        }
    }

    Ok(())
}
