pub mod profile_repository;
pub mod sqlite_profile_store;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use error_location::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// RFC 3339 form used for timestamps written from SQL, matching what serde
/// writes for `DateTime<Utc>`.
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[track_caller]
pub(crate) fn parse_uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::CorruptRow {
        message: format!("{} is not a UUID ({}): {}", column, value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
