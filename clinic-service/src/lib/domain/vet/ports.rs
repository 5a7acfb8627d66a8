use async_trait::async_trait;

use crate::domain::vet::errors::VetError;
use crate::domain::vet::models::RegisterVetCommand;
use crate::domain::vet::models::UpdateVetCommand;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::Vet;
use crate::domain::vet::models::VetId;

/// Port for vet domain service operations.
#[async_trait]
pub trait VetServicePort: Send + Sync + 'static {
    /// Register a new vet account.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_vet(&self, command: RegisterVetCommand) -> Result<Vet, VetError>;

    /// Check login credentials.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Username unknown or password mismatch
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, username: &str, password: &str) -> Result<Vet, VetError>;

    /// Retrieve vet by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Vet does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_vet(&self, id: &VetId) -> Result<Vet, VetError>;

    /// Retrieve vet by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No vet with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_vet_by_username(&self, username: &Username) -> Result<Vet, VetError>;

    /// Replace the editable fields of the acting vet's own account.
    ///
    /// # Errors
    /// * `Forbidden` - `actor` is not the vet being updated
    /// * `NotFound` - Vet does not exist
    /// * `UsernameAlreadyExists` - New username belongs to another vet
    /// * `DatabaseError` - Database operation failed
    async fn update_vet(
        &self,
        actor: &VetId,
        id: &VetId,
        command: UpdateVetCommand,
    ) -> Result<Vet, VetError>;

    /// Delete a vet account. Animals and treatments it owns are left in place.
    ///
    /// # Errors
    /// * `NotFound` - Vet does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_vet(&self, id: &VetId) -> Result<(), VetError>;
}

/// Persistence operations for vet records.
#[async_trait]
pub trait VetRepository: Send + Sync + 'static {
    /// Persist new vet.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Store-level unique constraint on username hit
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, vet: Vet) -> Result<Vet, VetError>;

    /// Retrieve vet by identifier, `None` if absent.
    async fn find_by_id(&self, id: &VetId) -> Result<Option<Vet>, VetError>;

    /// Retrieve vet by username, `None` if absent.
    async fn find_by_username(&self, username: &Username) -> Result<Option<Vet>, VetError>;

    /// Overwrite username, email and password hash of an existing vet.
    ///
    /// # Errors
    /// * `NotFound` - Vet does not exist
    /// * `UsernameAlreadyExists` - Store-level unique constraint on username hit
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, vet: Vet) -> Result<Vet, VetError>;

    /// Remove vet from storage. Removing an absent id succeeds.
    async fn delete(&self, id: &VetId) -> Result<(), VetError>;
}
