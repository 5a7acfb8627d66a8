use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::treatment::models::Treatment;

pub mod create_treatment;
pub mod delete_treatment;
pub mod get_treatment;
pub mod list_treatments;
pub mod update_treatment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreatmentData {
    pub id: String,
    pub description: String,
    pub medication: String,
    pub duration: String,
    pub animal_id: String,
    pub vet_id: String,
    pub vet_username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Treatment> for TreatmentData {
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
