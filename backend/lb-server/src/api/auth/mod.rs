#[allow(clippy::module_inception)]
pub mod auth;
pub mod callback_query;
pub mod whitelist_response;
