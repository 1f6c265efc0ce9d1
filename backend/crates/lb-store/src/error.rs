use lb_auth::AuthError;
use lb_core::{CoreError, ErrorLocation};

use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Identity {identity} may not modify {kind} records {location}")]
    Forbidden {
        identity: String,
        kind: &'static str,
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("No {kind} with id {id} {location}")]
    NotFound {
        kind: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Failed to {operation} snapshot {path}: {source} {location}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Snapshot {path} is corrupted: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize snapshot: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub(crate) fn io(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            operation,
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Durable state could not be read or written
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Corrupted { .. } | Self::Serialization { .. }
        )
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { message, field, .. } => StoreError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        StoreError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
