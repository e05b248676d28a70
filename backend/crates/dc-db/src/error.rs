use dc_core::CoreError;

use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document encoding error: {source} {location}")]
    Document {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    /// A unique column already holds the submitted value.
    #[error("Conflict on {field}: {message} {location}")]
    Conflict {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row: {message} {location}")]
    CorruptRow {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn conflict<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self::Conflict {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Document {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Conflicts surface as validation errors on the clashing field. Every
/// other failure reaches the domain layer as an opaque `CoreError::Store`.
impl From<DbError> for CoreError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        match source {
            DbError::Conflict { field, message, .. } => CoreError::validation(field, message),
            other => CoreError::store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
