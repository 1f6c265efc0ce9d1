use serde::Deserialize;

/// Query string the identity provider appends to the callback URL
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
    /// Set by the provider when the user declined or the request was invalid
    #[serde(default)]
    pub error: Option<String>,
}
