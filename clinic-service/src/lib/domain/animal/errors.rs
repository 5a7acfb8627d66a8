use thiserror::Error;

/// Error for AnimalId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnimalIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for animal field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnimalDetailsError {
    #[error("Field '{0}' must not be blank")]
    Blank(&'static str),
}

/// Top-level error for all animal-related operations
#[derive(Debug, Clone, Error)]
pub enum AnimalError {
    #[error("Invalid animal ID: {0}")]
    InvalidAnimalId(#[from] AnimalIdError),

    #[error("Invalid animal: {0}")]
    InvalidDetails(#[from] AnimalDetailsError),

    #[error("Animal not found: {0}")]
    NotFound(String),

    #[error("Not authorized to modify animal {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
