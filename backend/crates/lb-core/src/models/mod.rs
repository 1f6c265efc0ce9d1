pub mod blacklist_entry;
pub mod identity;
pub mod record;
pub mod record_filter;
pub mod vehicle;

use crate::{CoreError, Result as CoreResult};

/// Returns the trimmed value, or a validation error naming `field` when it
/// is absent or blank.
#[track_caller]
pub(crate) fn required_text(value: Option<String>, field: &str) -> CoreResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(CoreError::missing_field(field)),
    }
}
