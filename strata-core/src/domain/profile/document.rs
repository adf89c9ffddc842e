// strata-core/src/domain/profile/document.rs

use serde::Deserialize;
use std::collections::HashMap;

/// In-memory form of a profiles.yml: profile name -> profile.
///
/// The document is a read-only value object. Every operation built on top of
/// it is a pure function, so concurrent callers may share one document freely.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProfileDocument {
    #[serde(flatten)]
    pub profiles: HashMap<String, Profile>,
}

/// A named group of alternative connection targets (dev/prod/...) for one
/// logical project. `target` names the default entry of `outputs`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Profile {
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub outputs: HashMap<String, ConnectionRecord>,
}

/// Raw, type-tagged connection record as it appears under a profile's
/// `outputs`. Only the fields relevant to `record_type` are meaningful;
/// the rest are ignored by conversion.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConnectionRecord {
    #[serde(rename = "type", default)]
    pub record_type: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub path: Option<String>,
}
