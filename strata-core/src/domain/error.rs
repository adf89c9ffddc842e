// strata-core/src/domain/error.rs

use crate::domain::source::SourceKind;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Profile document is missing")]
    #[diagnostic(
        code(strata::domain::missing_document),
        help("Load a profiles.yml before asking for data sources.")
    )]
    MissingDocument,

    #[error("Profile '{0}' not found in document")]
    #[diagnostic(
        code(strata::domain::profile_not_found),
        help("Check the profile name against the top-level keys of your profiles.yml.")
    )]
    ProfileNotFound(String),

    #[error("Target '{target}' not found in profile '{profile}'")]
    #[diagnostic(
        code(strata::domain::target_not_found),
        help("Check the target name against the 'outputs' keys of the profile.")
    )]
    TargetNotFound { profile: String, target: String },

    #[error("Invalid {kind} data source: {reason}")]
    #[diagnostic(code(strata::domain::invalid_data_source))]
    InvalidDataSource { kind: SourceKind, reason: String },

    #[error("Data source at '{profile}.{target}' failed validation")]
    #[diagnostic(code(strata::domain::target_validation))]
    TargetValidation {
        profile: String,
        target: String,
        #[source]
        source: Box<DomainError>,
    },
}
