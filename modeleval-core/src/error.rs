use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("Prediction function failed: {0}")]
    InvocationError(String),
    #[error("Domain error: {0}")]
    DomainError(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::InvalidConfiguration(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
