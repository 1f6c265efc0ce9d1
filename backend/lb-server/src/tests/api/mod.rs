mod cookies;
mod error;
mod records;
