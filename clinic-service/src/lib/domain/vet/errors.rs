use thiserror::Error;

/// Error for VetId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VetIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be blank")]
    Blank,

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains control characters")]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all vet-related operations
#[derive(Debug, Clone, Error)]
pub enum VetError {
    #[error("Invalid vet ID: {0}")]
    InvalidVetId(#[from] VetIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Vet not found: {0}")]
    NotFound(String),

    #[error("Vet not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("Username already registered: {0}")]
    UsernameAlreadyExists(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username cannot be changed")]
    UsernameChangeNotAllowed,

    #[error("Not authorized to modify vet {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
