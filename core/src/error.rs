use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    #[error("Unknown confirmation token")]
    UnknownConfirmToken,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
