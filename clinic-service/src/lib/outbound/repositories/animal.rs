use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::AnimalId;
use crate::domain::animal::ports::AnimalRepository;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::VetId;
use crate::outbound::database::MongoContext;
use crate::outbound::database::ANIMALS_COLLECTION;

/// Stored shape of an animal in the `animals` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnimalDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    species: String,
    breed: Option<String>,
    owner: String,
    vet_id: String,
    vet_username: String,
    created_at: DateTime<Utc>,
}

impl From<&Animal> for AnimalDocument {
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

impl TryFrom<AnimalDocument> for Animal {
    type Error = AnimalError;

    fn try_from(document: AnimalDocument) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, e: &dyn std::fmt::Display| {
            AnimalError::DatabaseError(format!(
                "Animal {} has an invalid {}: {}",
                document.id, field, e
            ))
        };

        let id = AnimalId::from_string(&document.id).map_err(|e| corrupt("id", &e))?;
        let vet_id = VetId::from_string(&document.vet_id).map_err(|e| corrupt("vet_id", &e))?;
        let vet_username =
            Username::new(document.vet_username.clone()).map_err(|e| corrupt("vet_username", &e))?;

        Ok(Animal {
            id,
            name: document.name,
            species: document.species,
            breed: document.breed,
            owner: document.owner,
            vet_id,
            vet_username,
            created_at: document.created_at,
        })
    }
}

pub struct MongoAnimalRepository {
    animals: Collection<AnimalDocument>,
}

impl MongoAnimalRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            animals: context.collection(ANIMALS_COLLECTION),
        }
    }
}

fn database_error(error: mongodb::error::Error) -> AnimalError {
    AnimalError::DatabaseError(error.to_string())
}

#[async_trait]
impl AnimalRepository for MongoAnimalRepository {
    async fn create(&self, animal: Animal) -> Result<Animal, AnimalError> {
        self.animals
            .insert_one(AnimalDocument::from(&animal))
            .await
            .map_err(database_error)?;

        Ok(animal)
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalError> {
        self.animals
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(database_error)?
            .map(Animal::try_from)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Animal>, AnimalError> {
        let documents: Vec<AnimalDocument> = self
            .animals
            .find(doc! {})
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        documents.into_iter().map(Animal::try_from).collect()
    }

    async fn update(&self, animal: Animal) -> Result<Animal, AnimalError> {
        let result = self
            .animals
            .update_one(
                doc! { "_id": animal.id.to_string() },
                doc! {
                    "$set": {
                        "name": animal.name.as_str(),
                        "species": animal.species.as_str(),
                        "breed": animal.breed.clone(),
                        "owner": animal.owner.as_str(),
                    }
                },
            )
            .await
            .map_err(database_error)?;

        if result.matched_count == 0 {
            return Err(AnimalError::NotFound(animal.id.to_string()));
        }

        Ok(animal)
    }

    async fn delete(&self, id: &AnimalId) -> Result<(), AnimalError> {
        self.animals
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
