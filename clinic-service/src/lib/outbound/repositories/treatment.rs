use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::animal::models::AnimalId;
use crate::domain::treatment::errors::TreatmentError;
use crate::domain::treatment::models::Treatment;
use crate::domain::treatment::models::TreatmentId;
use crate::domain::treatment::ports::TreatmentRepository;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::VetId;
use crate::outbound::database::MongoContext;
use crate::outbound::database::TREATMENTS_COLLECTION;

/// Stored shape of a treatment in the `treatments` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TreatmentDocument {
    #[serde(rename = "_id")]
    id: String,
    description: String,
    medication: String,
    duration: String,
    animal_id: String,
    vet_id: String,
    vet_username: String,
    created_at: DateTime<Utc>,
}

impl From<&Treatment> for TreatmentDocument {
    fn from(treatment: &Treatment) -> Self {
        Self {
            id: treatment.id.to_string(),
            description: treatment.description.clone(),
            medication: treatment.medication.clone(),
            duration: treatment.duration.clone(),
            animal_id: treatment.animal_id.to_string(),
            vet_id: treatment.vet_id.to_string(),
            vet_username: treatment.vet_username.as_str().to_string(),
            created_at: treatment.created_at,
        }
    }
}

impl TryFrom<TreatmentDocument> for Treatment {
    type Error = TreatmentError;

    fn try_from(document: TreatmentDocument) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, e: &dyn std::fmt::Display| {
            TreatmentError::DatabaseError(format!(
                "Treatment {} has an invalid {}: {}",
                document.id, field, e
            ))
        };

        let id = TreatmentId::from_string(&document.id).map_err(|e| corrupt("id", &e))?;
        let animal_id =
            AnimalId::from_string(&document.animal_id).map_err(|e| corrupt("animal_id", &e))?;
        let vet_id = VetId::from_string(&document.vet_id).map_err(|e| corrupt("vet_id", &e))?;
        let vet_username =
            Username::new(document.vet_username.clone()).map_err(|e| corrupt("vet_username", &e))?;

        Ok(Treatment {
            id,
            description: document.description,
            medication: document.medication,
            duration: document.duration,
            animal_id,
            vet_id,
            vet_username,
            created_at: document.created_at,
        })
    }
}

pub struct MongoTreatmentRepository {
    treatments: Collection<TreatmentDocument>,
}

impl MongoTreatmentRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            treatments: context.collection(TREATMENTS_COLLECTION),
        }
    }
}

fn database_error(error: mongodb::error::Error) -> TreatmentError {
    TreatmentError::DatabaseError(error.to_string())
}

#[async_trait]
impl TreatmentRepository for MongoTreatmentRepository {
    async fn create(&self, treatment: Treatment) -> Result<Treatment, TreatmentError> {
        self.treatments
            .insert_one(TreatmentDocument::from(&treatment))
            .await
            .map_err(database_error)?;

        Ok(treatment)
    }

    async fn find_by_id(&self, id: &TreatmentId) -> Result<Option<Treatment>, TreatmentError> {
        self.treatments
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(database_error)?
            .map(Treatment::try_from)
            .transpose()
    }

    async fn find_by_animal(
        &self,
        animal_id: &AnimalId,
    ) -> Result<Vec<Treatment>, TreatmentError> {
        let documents: Vec<TreatmentDocument> = self
            .treatments
            .find(doc! { "animal_id": animal_id.to_string() })
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        documents.into_iter().map(Treatment::try_from).collect()
    }

    async fn update(&self, treatment: Treatment) -> Result<Treatment, TreatmentError> {
        let result = self
            .treatments
            .update_one(
                doc! { "_id": treatment.id.to_string() },
                doc! {
                    "$set": {
                        "description": treatment.description.as_str(),
                        "medication": treatment.medication.as_str(),
                        "duration": treatment.duration.as_str(),
                    }
                },
            )
            .await
            .map_err(database_error)?;

        if result.matched_count == 0 {
            return Err(TreatmentError::NotFound(treatment.id.to_string()));
        }

        Ok(treatment)
    }

    async fn delete(&self, id: &TreatmentId) -> Result<(), TreatmentError> {
        self.treatments
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
