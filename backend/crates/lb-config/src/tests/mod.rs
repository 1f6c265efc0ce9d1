
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set LB_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("LB_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set the minimum env needed for validate() to pass
pub(crate) fn required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("LB_OAUTH_CLIENT_ID", "client-123"),
        EnvGuard::set("LB_OAUTH_CLIENT_SECRET", "client-secret"),
        EnvGuard::set("LB_SESSION_SECRET", "12345678901234567890123456789012"),
    ]
}
