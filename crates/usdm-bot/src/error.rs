//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Validation error: {0}")]
    Validation(#[from] usdm_core::ValidationError),

    #[error(transparent)]
    Client(#[from] usdm_client::ClientError),

    #[error(transparent)]
    Exec(#[from] usdm_exec::ExecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
