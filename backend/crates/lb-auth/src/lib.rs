pub mod authorization_policy;
pub mod claims;
pub mod credential;
pub mod error;
pub mod identity_resolver;
pub mod provider_settings;
pub mod session_binder;

pub use authorization_policy::AuthorizationPolicy;
pub use claims::Claims;
pub use credential::Credential;
pub use error::{AuthError, Result};
pub use identity_resolver::IdentityResolver;
pub use provider_settings::ProviderSettings;
pub use session_binder::SessionBinder;
