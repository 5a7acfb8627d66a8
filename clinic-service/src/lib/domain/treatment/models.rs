use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::animal::models::AnimalId;
use crate::domain::treatment::errors::TreatmentDetailsError;
use crate::domain::treatment::errors::TreatmentIdError;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::VetId;
use crate::domain::vet::models::VetIdentity;

/// Treatment given to an animal, owned by the vet that recorded it.
///
/// `animal_id` is not checked against the animal registry; a treatment may
/// outlive the animal it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Treatment {
    pub id: TreatmentId,
    pub description: String,
    pub medication: String,
    pub duration: String,
    pub animal_id: AnimalId,
    pub vet_id: VetId,
    pub vet_username: Username,
    pub created_at: DateTime<Utc>,
}

impl Treatment {
    pub fn is_owned_by(&self, vet: &VetIdentity) -> bool {
        self.vet_id == vet.id && self.vet_username == vet.username
    }

    /// Merge the provided fields. Animal and owning vet are immutable.
    pub fn apply(&mut self, command: UpdateTreatmentCommand) {
        if let Some(description) = command.description {
            self.description = description;
        }

        if let Some(medication) = command.medication {
            self.medication = medication;
        }

        if let Some(duration) = command.duration {
            self.duration = duration;
        }
    }
}

/// Treatment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreatmentId(pub Uuid);

impl TreatmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a treatment ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TreatmentIdError> {
        Uuid::parse_str(s)
            .map(TreatmentId)
            .map_err(|e| TreatmentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TreatmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TreatmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fields supplied when recording a treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentDetails {
    pub description: String,
    pub medication: String,
    pub duration: String,
}

impl TreatmentDetails {
    /// Values are kept exactly as given.
    ///
    /// # Errors
    /// * `Blank` - a field is empty or whitespace only
    pub fn new(
        description: String,
        medication: String,
        duration: String,
    ) -> Result<Self, TreatmentDetailsError> {
        Ok(Self {
            description: non_blank("description", description)?,
            medication: non_blank("medication", medication)?,
            duration: non_blank("duration", duration)?,
        })
    }
}

/// Partial update of a treatment; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTreatmentCommand {
    pub description: Option<String>,
    pub medication: Option<String>,
    pub duration: Option<String>,
}

impl UpdateTreatmentCommand {
    /// # Errors
    /// * `Blank` - a provided field is empty or whitespace only
    pub fn new(
        description: Option<String>,
        medication: Option<String>,
        duration: Option<String>,
    ) -> Result<Self, TreatmentDetailsError> {
        Ok(Self {
            description: description
                .map(|v| non_blank("description", v))
                .transpose()?,
            medication: medication.map(|v| non_blank("medication", v)).transpose()?,
            duration: duration.map(|v| non_blank("duration", v)).transpose()?,
        })
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String, TreatmentDetailsError> {
    if value.trim().is_empty() {
        Err(TreatmentDetailsError::Blank(field))
    } else {
        Ok(value)
    }
}
