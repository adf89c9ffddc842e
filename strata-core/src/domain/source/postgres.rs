// strata-core/src/domain/source/postgres.rs

use crate::domain::profile::ConnectionRecord;
use serde::Serialize;
use validator::Validate;

/// Network descriptor for a PostgreSQL target. Field values are copied from
/// the connection record verbatim, with no defaulting or normalization.
///
/// `user` and `password` are recommended but not required by the contract:
/// only host, database and port carry validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate, Default)]
pub struct PostgresDataSource {
    #[validate(length(min = 1, message = "host cannot be empty"))]
    pub host: String,

    #[validate(range(min = 1, message = "port must be a positive integer"))]
    pub port: u16,

    #[validate(length(min = 1, message = "database cannot be empty"))]
    pub database: String,

    pub user: String,
    pub password: String,
}

impl PostgresDataSource {
    pub fn from_record(record: &ConnectionRecord) -> Self {
        Self {
            host: record.host.clone().unwrap_or_default(),
            port: record.port.unwrap_or_default(),
            database: record.database.clone().unwrap_or_default(),
            user: record.user.clone().unwrap_or_default(),
            password: record.password.clone().unwrap_or_default(),
        }
    }
}
