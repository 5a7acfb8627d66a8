use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::vet::errors::VetError;
use crate::domain::vet::models::RegisterVetCommand;
use crate::domain::vet::models::UpdateVetCommand;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::Vet;
use crate::domain::vet::models::VetId;
use crate::domain::vet::ports::VetRepository;
use crate::domain::vet::ports::VetServicePort;

/// Hash checked when a login names no stored vet, so an unknown username costs
/// the same Argon2 work as a wrong password.
static UNKNOWN_VET_HASH: OnceLock<String> = OnceLock::new();

/// Domain service implementation for vet accounts.
pub struct VetService<VR>
where
    VR: VetRepository,
{
    repository: Arc<VR>,
    password_hasher: auth::PasswordHasher,
}

impl<VR> VetService<VR>
where
    VR: VetRepository,
{
    pub fn new(repository: Arc<VR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn ensure_username_available(&self, username: &Username) -> Result<(), VetError> {
        match self.repository.find_by_username(username).await? {
            Some(_) => Err(VetError::UsernameAlreadyExists(username.to_string())),
            None => Ok(()),
        }
    }

    fn reject_unknown_vet(&self, password: &str) -> VetError {
        let hash = UNKNOWN_VET_HASH.get_or_init(|| {
            self.password_hasher
                .hash("unknown-vet-placeholder")
                .unwrap_or_default()
        });
        self.password_hasher.verify(password, hash);

        VetError::InvalidCredentials
    }
}

#[async_trait]
impl<VR> VetServicePort for VetService<VR>
where
    VR: VetRepository,
{
    async fn register_vet(&self, command: RegisterVetCommand) -> Result<Vet, VetError> {
        self.ensure_username_available(&command.username).await?;

        let password_hash = self.password_hasher.hash(&command.password)?;

        let vet = Vet {
            id: VetId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(vet).await?;
        tracing::info!(vet_id = %created.id, username = %created.username, "Vet registered");

        Ok(created)
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Vet, VetError> {
        let Ok(username) = Username::new(username.to_string()) else {
            return Err(self.reject_unknown_vet(password));
        };

        let Some(vet) = self.repository.find_by_username(&username).await? else {
            return Err(self.reject_unknown_vet(password));
        };

        if !self.password_hasher.verify(password, &vet.password_hash) {
            tracing::info!(username = %username, "Login rejected");
            return Err(VetError::InvalidCredentials);
        }

        Ok(vet)
    }

    async fn get_vet(&self, id: &VetId) -> Result<Vet, VetError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(VetError::NotFound(id.to_string()))
    }

    async fn get_vet_by_username(&self, username: &Username) -> Result<Vet, VetError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(VetError::NotFoundByUsername(username.to_string()))
    }

    async fn update_vet(
        &self,
        actor: &VetId,
        id: &VetId,
        command: UpdateVetCommand,
    ) -> Result<Vet, VetError> {
        if actor != id {
            return Err(VetError::Forbidden(id.to_string()));
        }

        let mut vet = self.get_vet(id).await?;

        // Records carry the owner's username, so it must stay stable.
        if command.username != vet.username {
            return Err(VetError::UsernameChangeNotAllowed);
        }

        vet.email = command.email;
        vet.password_hash = self.password_hasher.hash(&command.password)?;

        self.repository.update(vet).await
    }

    async fn delete_vet(&self, id: &VetId) -> Result<(), VetError> {
        self.get_vet(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(vet_id = %id, "Vet deleted");

        Ok(())
    }
}
