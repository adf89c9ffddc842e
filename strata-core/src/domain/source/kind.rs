// strata-core/src/domain/source/kind.rs

use std::fmt;

// Closed set of data source kinds. Adding a kind means adding a variant here
// plus one dispatch arm in DataSource::from_record; callers never type-switch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Postgres,
    LocalFile,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::LocalFile => "local_file",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "local_file" => Ok(Self::LocalFile),
            _ => Err(format!("Unknown source kind: {}", s)),
        }
    }
}
