use serde::Serialize;

/// Body returned by successful deletes
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
