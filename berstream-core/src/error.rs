use thiserror::Error;

/// Main error type for berstream operations
#[derive(Error, Debug)]
pub enum BerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid tag class value: {0}")]
    InvalidTagClass(i32),
}

/// Result type alias for berstream operations
pub type BerResult<T> = Result<T, BerError>;
