use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WhitelistResponse {
    pub whitelisted: bool,
}
