use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("record ID {0} already exists")]
    DuplicateId(i64),

    #[error("record ID {0} not found")]
    NotFound(i64),

    #[error("no file created yet")]
    NoFileName,
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, CardboxError>;
