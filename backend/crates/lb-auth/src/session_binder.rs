use crate::{AuthError, Claims, Credential, Result as AuthErrorResult};

use lb_core::Identity;

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Binds a resolved identity to an HS256-signed, expiring credential.
pub struct SessionBinder {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionBinder {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh credential for `identity`
    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<Credential> {
        let now = Utc::now().timestamp();
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: identity.as_str().to_string(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::CredentialEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        Ok(Credential::new(token))
    }

    /// Resolve a presented credential back to the identity it was issued for
    #[track_caller]
    pub fn resolve(&self, credential: Option<&str>) -> AuthErrorResult<Identity> {
        let token = match credential.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(AuthError::NotAuthenticated {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::CredentialExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::InvalidCredential {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(Identity::new(token_data.claims.sub))
    }
}
