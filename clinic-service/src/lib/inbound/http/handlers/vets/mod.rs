use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::vet::models::Vet;

pub mod delete_vet;
pub mod login;
pub mod register_vet;
pub mod update_vet;

/// Public view of a vet. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VetData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Vet> for VetData {
    fn from(vet: &Vet) -> Self {
        Self {
            id: vet.id.to_string(),
            username: vet.username.as_str().to_string(),
            email: vet.email.as_str().to_string(),
            created_at: vet.created_at,
        }
    }
}
