use thiserror::Error;

use crate::domain::animal::errors::AnimalIdError;

/// Error for TreatmentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreatmentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for treatment field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreatmentDetailsError {
    #[error("Field '{0}' must not be blank")]
    Blank(&'static str),
}

/// Top-level error for all treatment-related operations
#[derive(Debug, Clone, Error)]
pub enum TreatmentError {
    #[error("Invalid treatment ID: {0}")]
    InvalidTreatmentId(#[from] TreatmentIdError),

    #[error("Invalid animal ID: {0}")]
    InvalidAnimalId(#[from] AnimalIdError),

    #[error("Invalid treatment: {0}")]
    InvalidDetails(#[from] TreatmentDetailsError),

    #[error("Treatment not found: {0}")]
    NotFound(String),

    #[error("Not authorized to modify treatment {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
