use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Duplicate contact: {0}")]
    Duplicate(#[from] DuplicateError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Unrecognized storage medium: '{0}'")]
    ParseStorage(String),
}

/// Input that can never be stored, whatever the store holds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("number '{0}' must contain only digits")]
    InvalidNumberFormat(String),

    #[error("name {0:?} must not contain line breaks")]
    LineBreakInName(String),
}

/// Input that collides with a contact already in the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DuplicateError {
    #[error("the name '{0}' already exists")]
    DuplicateName(String),

    #[error("the number '{0}' already exists")]
    DuplicateNumber(String),
}
