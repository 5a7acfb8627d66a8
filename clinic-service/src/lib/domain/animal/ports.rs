use async_trait::async_trait;

use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::AnimalDetails;
use crate::domain::animal::models::AnimalId;
use crate::domain::vet::models::VetIdentity;

/// Port for animal domain service operations.
///
/// Mutating operations take the acting vet and enforce ownership: the record
/// is resolved first (`NotFound`), then its owner compared (`Forbidden`).
#[async_trait]
pub trait AnimalServicePort: Send + Sync + 'static {
    /// Register an animal owned by `actor`.
    async fn create_animal(
        &self,
        actor: &VetIdentity,
        details: AnimalDetails,
    ) -> Result<Animal, AnimalError>;

    /// # Errors
    /// * `NotFound` - Animal does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_animal(&self, id: &AnimalId) -> Result<Animal, AnimalError>;

    async fn list_animals(&self) -> Result<Vec<Animal>, AnimalError>;

    /// # Errors
    /// * `NotFound` - Animal does not exist
    /// * `Forbidden` - Animal belongs to another vet
    /// * `DatabaseError` - Database operation failed
    async fn update_animal(
        &self,
        actor: &VetIdentity,
        id: &AnimalId,
        details: AnimalDetails,
    ) -> Result<Animal, AnimalError>;

    /// # Errors
    /// * `NotFound` - Animal does not exist
    /// * `Forbidden` - Animal belongs to another vet
    /// * `DatabaseError` - Database operation failed
    async fn delete_animal(&self, actor: &VetIdentity, id: &AnimalId) -> Result<(), AnimalError>;
}

/// Persistence operations for animal records.
#[async_trait]
pub trait AnimalRepository: Send + Sync + 'static {
    async fn create(&self, animal: Animal) -> Result<Animal, AnimalError>;

    /// Retrieve animal by identifier, `None` if absent.
    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalError>;

    async fn list_all(&self) -> Result<Vec<Animal>, AnimalError>;

    /// Persist the descriptive fields of an existing animal.
    ///
    /// # Errors
    /// * `NotFound` - Animal does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, animal: Animal) -> Result<Animal, AnimalError>;

    /// Remove animal from storage. Removing an absent id succeeds.
    async fn delete(&self, id: &AnimalId) -> Result<(), AnimalError>;
}
