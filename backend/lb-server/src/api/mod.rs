pub mod auth;
pub mod blacklist;
pub mod cookies;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod records;
pub mod vehicles;
