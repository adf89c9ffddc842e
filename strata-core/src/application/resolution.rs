// strata-core/src/application/resolution.rs

use crate::domain::error::DomainError;
use crate::domain::profile::ProfileDocument;
use crate::domain::source::DataSource;
use crate::error::StrataError;

/// Lookup arguments for [`resolve_active`].
#[derive(Debug, Clone, Default)]
pub struct ActiveTargetQuery {
    /// Reserved for lookups across multiple profile documents; not consulted
    /// by the resolution below.
    pub registry: Option<String>,

    /// Profile to resolve. Must name a top-level key of the document.
    pub profile: String,

    /// Target within the profile. Missing or empty falls back to the
    /// profile's declared default target.
    pub target: Option<String>,
}

/// Locates the single active connection record of a profile and converts it.
///
/// Returns a one-element list, or an empty list when the resolved record has
/// an unsupported type: the caller asked for one specific target, and an
/// unsupported tag is the same designed no-op as in bulk conversion.
pub fn resolve_active(
    document: Option<&ProfileDocument>,
    query: &ActiveTargetQuery,
) -> Result<Vec<DataSource>, StrataError> {
    let document = document.ok_or(DomainError::MissingDocument)?;

    let profile = document
        .profiles
        .get(&query.profile)
        .ok_or_else(|| DomainError::ProfileNotFound(query.profile.clone()))?;

    let target = query
        .target
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(&profile.target);

    let record = profile
        .outputs
        .get(target)
        .ok_or_else(|| DomainError::TargetNotFound {
            profile: query.profile.clone(),
            target: target.to_string(),
        })?;

    Ok(DataSource::from_record(record).into_iter().collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn document() -> ProfileDocument {
        serde_yaml::from_str(
            r#"
project1:
  target: dev
  outputs:
    dev:
      type: postgres
      host: localhost
      port: 5432
      database: dev_db
      user: dev_user
    prod:
      type: postgres
      host: prod-host
      port: 5432
      database: prod_db
      user: prod_user
    legacy:
      type: unsupported_db
      host: old-host
"#,
        )
        .unwrap()
    }

    fn query(profile: &str, target: Option<&str>) -> ActiveTargetQuery {
        ActiveTargetQuery {
            registry: None,
            profile: profile.to_string(),
            target: target.map(str::to_string),
        }
    }

    fn database_of(source: &DataSource) -> String {
        match source {
            DataSource::Postgres(ds) => ds.database.clone(),
            _ => panic!("Expected a postgres data source"),
        }
    }

    #[test]
    fn test_resolves_default_target() {
        let doc = document();
        let sources = resolve_active(Some(&doc), &query("project1", None)).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(database_of(&sources[0]), "dev_db");
    }

    #[test]
    fn test_empty_target_falls_back_to_default() {
        let doc = document();
        let sources = resolve_active(Some(&doc), &query("project1", Some(""))).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(database_of(&sources[0]), "dev_db");
    }

    #[test]
    fn test_resolves_explicit_target() {
        let doc = document();
        let sources = resolve_active(Some(&doc), &query("project1", Some("prod"))).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(database_of(&sources[0]), "prod_db");
    }

    #[test]
    fn test_unknown_profile_is_not_found() {
        let doc = document();
        let result = resolve_active(Some(&doc), &query("nonexistent", None));

        match result {
            Err(StrataError::Domain(DomainError::ProfileNotFound(name))) => {
                assert_eq!(name, "nonexistent");
            }
            other => panic!("Expected ProfileNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unknown_target_is_not_found() {
        let doc = document();
        let result = resolve_active(Some(&doc), &query("project1", Some("nonexistent")));

        match result {
            Err(StrataError::Domain(DomainError::TargetNotFound { profile, target })) => {
                assert_eq!(profile, "project1");
                assert_eq!(target, "nonexistent");
            }
            other => panic!("Expected TargetNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unsupported_resolved_type_yields_empty_list() {
        let doc = document();
        let sources = resolve_active(Some(&doc), &query("project1", Some("legacy"))).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let result = resolve_active(None, &query("project1", None));
        assert!(matches!(
            result,
            Err(StrataError::Domain(DomainError::MissingDocument))
        ));
    }
}
