use async_trait::async_trait;

use crate::domain::animal::models::AnimalId;
use crate::domain::treatment::errors::TreatmentError;
use crate::domain::treatment::models::Treatment;
use crate::domain::treatment::models::TreatmentDetails;
use crate::domain::treatment::models::TreatmentId;
use crate::domain::treatment::models::UpdateTreatmentCommand;
use crate::domain::vet::models::VetIdentity;

/// Port for treatment domain service operations.
#[async_trait]
pub trait TreatmentServicePort: Send + Sync + 'static {
    /// Record a treatment for `animal_id`, owned by `actor`.
    async fn create_treatment(
        &self,
        actor: &VetIdentity,
        animal_id: &AnimalId,
        details: TreatmentDetails,
    ) -> Result<Treatment, TreatmentError>;

    /// # Errors
    /// * `NotFound` - Treatment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_treatment(&self, id: &TreatmentId) -> Result<Treatment, TreatmentError>;

    async fn list_treatments_for_animal(
        &self,
        animal_id: &AnimalId,
    ) -> Result<Vec<Treatment>, TreatmentError>;

    /// Change description, medication and/or duration.
    ///
    /// # Errors
    /// * `NotFound` - Treatment does not exist
    /// * `Forbidden` - Treatment belongs to another vet
    /// * `DatabaseError` - Database operation failed
    async fn update_treatment(
        &self,
        actor: &VetIdentity,
        id: &TreatmentId,
        command: UpdateTreatmentCommand,
    ) -> Result<Treatment, TreatmentError>;

    /// # Errors
    /// * `NotFound` - Treatment does not exist
    /// * `Forbidden` - Treatment belongs to another vet
    /// * `DatabaseError` - Database operation failed
    async fn delete_treatment(
        &self,
        actor: &VetIdentity,
        id: &TreatmentId,
    ) -> Result<(), TreatmentError>;
}

/// Persistence operations for treatment records.
#[async_trait]
pub trait TreatmentRepository: Send + Sync + 'static {
    async fn create(&self, treatment: Treatment) -> Result<Treatment, TreatmentError>;

    /// Retrieve treatment by identifier, `None` if absent.
    async fn find_by_id(&self, id: &TreatmentId) -> Result<Option<Treatment>, TreatmentError>;

    async fn find_by_animal(&self, animal_id: &AnimalId)
        -> Result<Vec<Treatment>, TreatmentError>;

    /// Persist description, medication and duration of an existing treatment.
    ///
    /// # Errors
    /// * `NotFound` - Treatment does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, treatment: Treatment) -> Result<Treatment, TreatmentError>;

    /// Remove treatment from storage. Removing an absent id succeeds.
    async fn delete(&self, id: &TreatmentId) -> Result<(), TreatmentError>;
}
