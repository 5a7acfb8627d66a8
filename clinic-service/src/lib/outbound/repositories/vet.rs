use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::Collection;
use serde::Deserialize;
use serde::Serialize;

use super::is_duplicate_key;
use crate::domain::vet::errors::VetError;
use crate::domain::vet::models::EmailAddress;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::Vet;
use crate::domain::vet::models::VetId;
use crate::domain::vet::ports::VetRepository;
use crate::outbound::database::MongoContext;
use crate::outbound::database::VETS_COLLECTION;

/// Stored shape of a vet in the `vets` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VetDocument {
    #[serde(rename = "_id")]
    id: String,
    username: String,
    email: String,
    hashed_password: String,
    created_at: DateTime<Utc>,
}

impl From<&Vet> for VetDocument {
    fn from(vet: &Vet) -> Self {
        Self {
            id: vet.id.to_string(),
            username: vet.username.as_str().to_string(),
            email: vet.email.as_str().to_string(),
            hashed_password: vet.password_hash.clone(),
            created_at: vet.created_at,
        }
    }
}

impl TryFrom<VetDocument> for Vet {
    type Error = VetError;

    fn try_from(document: VetDocument) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, e: &dyn std::fmt::Display| {
            VetError::DatabaseError(format!(
                "Vet {} has an invalid {}: {}",
                document.id, field, e
            ))
        };

        let id = VetId::from_string(&document.id).map_err(|e| corrupt("id", &e))?;
        let username =
            Username::new(document.username.clone()).map_err(|e| corrupt("username", &e))?;
        let email = EmailAddress::new(document.email.clone()).map_err(|e| corrupt("email", &e))?;

        Ok(Vet {
            id,
            username,
            email,
            password_hash: document.hashed_password,
            created_at: document.created_at,
        })
    }
}

pub struct MongoVetRepository {
    vets: Collection<VetDocument>,
}

impl MongoVetRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            vets: context.collection(VETS_COLLECTION),
        }
    }

    async fn find_one(&self, filter: mongodb::bson::Document) -> Result<Option<Vet>, VetError> {
        self.vets
            .find_one(filter)
            .await
            .map_err(|e| VetError::DatabaseError(e.to_string()))?
            .map(Vet::try_from)
            .transpose()
    }

    fn map_write_error(error: mongodb::error::Error, vet: &Vet) -> VetError {
        if is_duplicate_key(&error) {
            VetError::UsernameAlreadyExists(vet.username.to_string())
        } else {
            VetError::DatabaseError(error.to_string())
        }
    }
}

#[async_trait]
impl VetRepository for MongoVetRepository {
    async fn create(&self, vet: Vet) -> Result<Vet, VetError> {
        self.vets
            .insert_one(VetDocument::from(&vet))
            .await
            .map_err(|e| Self::map_write_error(e, &vet))?;

        Ok(vet)
    }

    async fn find_by_id(&self, id: &VetId) -> Result<Option<Vet>, VetError> {
        self.find_one(doc! { "_id": id.to_string() }).await
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Vet>, VetError> {
        self.find_one(doc! { "username": username.as_str() }).await
    }

    async fn update(&self, vet: Vet) -> Result<Vet, VetError> {
        let result = self
            .vets
            .update_one(
                doc! { "_id": vet.id.to_string() },
                doc! {
                    "$set": {
                        "email": vet.email.as_str(),
                        "hashed_password": vet.password_hash.as_str(),
                    }
                },
            )
            .await
            .map_err(|e| Self::map_write_error(e, &vet))?;

        if result.matched_count == 0 {
            return Err(VetError::NotFound(vet.id.to_string()));
        }

        Ok(vet)
    }

    async fn delete(&self, id: &VetId) -> Result<(), VetError> {
        let result = self
            .vets
            .delete_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| VetError::DatabaseError(e.to_string()))?;

        tracing::debug!(vet_id = %id, deleted = result.deleted_count, "Vet delete executed");
        Ok(())
    }
}
