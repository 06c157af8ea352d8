#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PakError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid archive: {0}")]
    Invalid(String),
}

pub type PakResult<T> = Result<T, PakError>;
