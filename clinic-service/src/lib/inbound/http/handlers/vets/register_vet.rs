use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::VetData;
use crate::domain::vet::errors::EmailError;
use crate::domain::vet::errors::UsernameError;
use crate::domain::vet::models::EmailAddress;
use crate::domain::vet::models::RegisterVetCommand;
use crate::domain::vet::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn register_vet(
    State(state): State<AppState>,
    Json(body): Json<RegisterVetRequest>,
) -> Result<ApiSuccess<VetData>, ApiError> {
    state
        .vet_service
        .register_vet(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref vet| ApiSuccess::new(StatusCode::CREATED, vet.into()))
}

/// HTTP request body for registering a vet (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterVetRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterVetRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterVetRequest {
    fn try_into_command(self) -> Result<RegisterVetCommand, ParseRegisterVetRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(ParseRegisterVetRequestError::EmptyPassword);
        }
        Ok(RegisterVetCommand::new(username, email, self.password))
    }
}

impl From<ParseRegisterVetRequestError> for ApiError {
    fn from(err: ParseRegisterVetRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
