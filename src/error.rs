use thiserror::Error;

#[derive(Debug, Error)]
pub enum RolodexError {
    #[error("{field} does not match the required format")]
    InvalidField { field: String },

    #[error("Contact not found: {id}")]
    NotFound { id: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed record on line {line}: expected 5 fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type RolodexResult<T> = Result<T, RolodexError>;
