use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::AnimalDetails;
use crate::domain::animal::models::AnimalId;
use crate::domain::animal::ports::AnimalRepository;
use crate::domain::animal::ports::AnimalServicePort;
use crate::domain::vet::models::VetIdentity;

/// Domain service implementation for animal records.
pub struct AnimalService<AR>
where
    AR: AnimalRepository,
{
    repository: Arc<AR>,
}

impl<AR> AnimalService<AR>
where
    AR: AnimalRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }

    /// Resolve an animal the actor is allowed to mutate.
    async fn find_owned(&self, actor: &VetIdentity, id: &AnimalId) -> Result<Animal, AnimalError> {
        let animal = self.get_animal(id).await?;

        if !animal.is_owned_by(actor) {
            tracing::warn!(
                animal_id = %id,
                actor = %actor.username,
                actor_id = %actor.id,
                owner = %animal.vet_username,
                owner_id = %animal.vet_id,
                "Rejected mutation of animal owned by another vet"
            );
            return Err(AnimalError::Forbidden(id.to_string()));
        }

        Ok(animal)
    }
}

#[async_trait]
impl<AR> AnimalServicePort for AnimalService<AR>
where
    AR: AnimalRepository,
{
    async fn create_animal(
        &self,
        actor: &VetIdentity,
        details: AnimalDetails,
    ) -> Result<Animal, AnimalError> {
        let animal = Animal {
            id: AnimalId::new(),
            name: details.name,
            species: details.species,
            breed: details.breed,
            owner: details.owner,
            vet_id: actor.id,
            vet_username: actor.username.clone(),
            created_at: Utc::now(),
        };

        self.repository.create(animal).await
    }

    async fn get_animal(&self, id: &AnimalId) -> Result<Animal, AnimalError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AnimalError::NotFound(id.to_string()))
    }

    async fn list_animals(&self) -> Result<Vec<Animal>, AnimalError> {
        self.repository.list_all().await
    }

    async fn update_animal(
        &self,
        actor: &VetIdentity,
        id: &AnimalId,
        details: AnimalDetails,
    ) -> Result<Animal, AnimalError> {
        let mut animal = self.find_owned(actor, id).await?;
        animal.apply(details);

        self.repository.update(animal).await
    }

    async fn delete_animal(&self, actor: &VetIdentity, id: &AnimalId) -> Result<(), AnimalError> {
        self.find_owned(actor, id).await?;
        self.repository.delete(id).await
    }
}
