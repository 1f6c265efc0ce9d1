//! Session cookie rendering and lookup.

use lb_auth::Credential;

use axum::http::{HeaderMap, header};

#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    /// Add the `Secure` attribute
    pub secure: bool,
    pub max_age_secs: u64,
    /// Redirect target after login and logout
    pub landing_url: String,
}

impl CookieSettings {
    /// `Set-Cookie` value carrying a freshly issued credential
    pub fn session_cookie(&self, credential: &Credential) -> String {
        self.render(credential.as_str(), self.max_age_secs)
    }

    /// `Set-Cookie` value that makes the browser drop the credential
    pub fn expired_cookie(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age_secs: u64) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name, value, max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// The credential presented in the request's `Cookie` headers, if any
    pub fn find(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value.trim_matches('"').to_string())
            .filter(|value| !value.is_empty())
    }
}
