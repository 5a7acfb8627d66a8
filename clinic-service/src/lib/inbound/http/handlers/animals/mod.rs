use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::animal::errors::AnimalDetailsError;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::AnimalDetails;

pub mod create_animal;
pub mod delete_animal;
pub mod get_animal;
pub mod list_animals;
pub mod update_animal;

/// HTTP request body for creating or replacing an animal (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnimalRequest {
    name: String,
    species: String,
    #[serde(default)]
    breed: Option<String>,
    owner: String,
}

impl AnimalRequest {
    fn try_into_details(self) -> Result<AnimalDetails, AnimalDetailsError> {
        AnimalDetails::new(self.name, self.species, self.breed, self.owner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalData {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub owner: String,
    pub vet_id: String,
    pub vet_username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Animal> for AnimalData {
    fn from(animal: &Animal) -> Self {
        Self {
            id: animal.id.to_string(),
            name: animal.name.clone(),
            species: animal.species.clone(),
            breed: animal.breed.clone(),
            owner: animal.owner.clone(),
            vet_id: animal.vet_id.to_string(),
            vet_username: animal.vet_username.as_str().to_string(),
            created_at: animal.created_at,
        }
    }
}
