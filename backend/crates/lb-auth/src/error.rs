use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated: no credential presented {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Invalid credential: {message} {location}")]
    InvalidCredential {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential expired {location}")]
    CredentialExpired { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity {identity} is not whitelisted {location}")]
    Forbidden {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Authorization code exchange failed: {message} {location}")]
    AuthExchange {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential encoding failed: {source} {location}")]
    CredentialEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Auth configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn exchange<S: Into<String>>(message: S) -> Self {
        AuthError::AuthExchange {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AuthError::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for every failure that should be answered with 401
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated { .. }
                | Self::InvalidCredential { .. }
                | Self::CredentialExpired { .. }
                | Self::InvalidClaim { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
            Self::InvalidCredential { .. } => "INVALID_CREDENTIAL",
            Self::CredentialExpired { .. } => "CREDENTIAL_EXPIRED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::AuthExchange { .. } => "AUTH_EXCHANGE_FAILED",
            Self::CredentialEncode { .. } => "CREDENTIAL_ENCODE_FAILED",
            Self::Configuration { .. } => "AUTH_CONFIGURATION",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
