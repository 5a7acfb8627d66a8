use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::animal::errors::AnimalDetailsError;
use crate::domain::animal::errors::AnimalIdError;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::VetId;
use crate::domain::vet::models::VetIdentity;

/// Patient record, owned by the vet that registered it.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    /// Free-text name of the animal's keeper, not a vet.
    pub owner: String,
    pub vet_id: VetId,
    pub vet_username: Username,
    pub created_at: DateTime<Utc>,
}

impl Animal {
    pub fn is_owned_by(&self, vet: &VetIdentity) -> bool {
        self.vet_id == vet.id && self.vet_username == vet.username
    }

    /// Overwrite the descriptive fields. Id and owning vet never change.
    pub fn apply(&mut self, details: AnimalDetails) {
        self.name = details.name;
        self.species = details.species;
        self.breed = details.breed;
        self.owner = details.owner;
    }
}

/// Animal unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimalId(pub Uuid);

impl AnimalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an animal ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AnimalIdError> {
        Uuid::parse_str(s)
            .map(AnimalId)
            .map_err(|e| AnimalIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AnimalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Descriptive animal fields supplied by a vet on create and on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDetails {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub owner: String,
}

impl AnimalDetails {
    /// Validate animal fields. Values are stored exactly as given, except
    /// that a blank breed becomes `None`.
    ///
    /// # Errors
    /// * `Blank` - name, species, or owner is empty or whitespace only
    pub fn new(
        name: String,
        species: String,
        breed: Option<String>,
        owner: String,
    ) -> Result<Self, AnimalDetailsError> {
        Ok(Self {
            name: non_blank("name", name)?,
            species: non_blank("species", species)?,
            breed: breed.filter(|b| !b.trim().is_empty()),
            owner: non_blank("owner", owner)?,
        })
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String, AnimalDetailsError> {
    if value.trim().is_empty() {
        Err(AnimalDetailsError::Blank(field))
    } else {
        Ok(value)
    }
}
