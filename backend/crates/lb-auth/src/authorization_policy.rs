use crate::{AuthError, Result as AuthErrorResult};

use lb_core::Identity;

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;

/// Whitelist-based authorization. The member set is fixed for the lifetime
/// of the instance; reloading means building a new policy.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationPolicy {
    whitelist: HashSet<Identity>,
}

impl AuthorizationPolicy {
    /// Build from configured member ids. Blank entries are ignored.
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let whitelist = members
            .into_iter()
            .map(|m| m.as_ref().trim().to_string())
            .filter(|m| !m.is_empty())
            .map(Identity::new)
            .collect();

        Self { whitelist }
    }

    pub fn is_privileged(&self, identity: &Identity) -> bool {
        self.whitelist.contains(identity)
    }

    #[track_caller]
    pub fn require_privileged(&self, identity: &Identity) -> AuthErrorResult<()> {
        if self.is_privileged(identity) {
            Ok(())
        } else {
            Err(AuthError::Forbidden {
                identity: identity.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.whitelist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.whitelist.is_empty()
    }
}
