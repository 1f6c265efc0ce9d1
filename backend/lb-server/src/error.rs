use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] lb_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] lb_auth::AuthError),

    #[error("Record store error: {0}")]
    Store(#[from] lb_store::StoreError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
