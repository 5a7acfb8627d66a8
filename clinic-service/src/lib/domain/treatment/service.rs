use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::animal::models::AnimalId;
use crate::domain::treatment::errors::TreatmentError;
use crate::domain::treatment::models::Treatment;
use crate::domain::treatment::models::TreatmentDetails;
use crate::domain::treatment::models::TreatmentId;
use crate::domain::treatment::models::UpdateTreatmentCommand;
use crate::domain::treatment::ports::TreatmentRepository;
use crate::domain::treatment::ports::TreatmentServicePort;
use crate::domain::vet::models::VetIdentity;

/// Domain service implementation for treatment records.
pub struct TreatmentService<TR>
where
    TR: TreatmentRepository,
{
    repository: Arc<TR>,
}

impl<TR> TreatmentService<TR>
where
    TR: TreatmentRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }

    async fn find_owned(
        &self,
        actor: &VetIdentity,
        id: &TreatmentId,
    ) -> Result<Treatment, TreatmentError> {
        let treatment = self.get_treatment(id).await?;

        if !treatment.is_owned_by(actor) {
            tracing::warn!(
                treatment_id = %id,
                actor = %actor.username,
                actor_id = %actor.id,
                owner = %treatment.vet_username,
                owner_id = %treatment.vet_id,
                "Rejected mutation of treatment owned by another vet"
            );
            return Err(TreatmentError::Forbidden(id.to_string()));
        }

        Ok(treatment)
    }
}

#[async_trait]
impl<TR> TreatmentServicePort for TreatmentService<TR>
where
    TR: TreatmentRepository,
{
    async fn create_treatment(
        &self,
        actor: &VetIdentity,
        animal_id: &AnimalId,
        details: TreatmentDetails,
    ) -> Result<Treatment, TreatmentError> {
        let treatment = Treatment {
            id: TreatmentId::new(),
            description: details.description,
            medication: details.medication,
            duration: details.duration,
            animal_id: *animal_id,
            vet_id: actor.id,
            vet_username: actor.username.clone(),
            created_at: Utc::now(),
        };

        self.repository.create(treatment).await
    }

    async fn get_treatment(&self, id: &TreatmentId) -> Result<Treatment, TreatmentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TreatmentError::NotFound(id.to_string()))
    }

    async fn list_treatments_for_animal(
        &self,
        animal_id: &AnimalId,
    ) -> Result<Vec<Treatment>, TreatmentError> {
        self.repository.find_by_animal(animal_id).await
    }

    async fn update_treatment(
        &self,
        actor: &VetIdentity,
        id: &TreatmentId,
        command: UpdateTreatmentCommand,
    ) -> Result<Treatment, TreatmentError> {
        let mut treatment = self.find_owned(actor, id).await?;
        treatment.apply(command);

        self.repository.update(treatment).await
    }

    async fn delete_treatment(
        &self,
        actor: &VetIdentity,
        id: &TreatmentId,
    ) -> Result<(), TreatmentError> {
        self.find_owned(actor, id).await?;
        self.repository.delete(id).await
    }
}
