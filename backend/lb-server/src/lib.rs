pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{is_whitelisted, login, logout, oauth_callback},
        callback_query::CallbackQuery,
        whitelist_response::WhitelistResponse,
    },
    blacklist::blacklist::{
        create_blacklist_entry, delete_blacklist_entry, get_blacklist_entry, list_blacklist,
    },
    cookies::CookieSettings,
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_identity::CurrentIdentity,
    vehicles::vehicles::{create_record, delete_record, get_record, list_records},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
