use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::VetData;
use crate::domain::vet::errors::VetError;
use crate::domain::vet::models::EmailAddress;
use crate::domain::vet::models::UpdateVetCommand;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::VetId;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body replacing a vet's fields (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateVetRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UpdateVetRequest {
    fn try_into_command(self) -> Result<UpdateVetCommand, VetError> {
        Ok(UpdateVetCommand {
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            password: self.password,
        })
    }
}

pub async fn update_vet(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Path(id): Path<String>,
    Json(req): Json<UpdateVetRequest>,
) -> Result<ApiSuccess<VetData>, ApiError> {
    let vet_id = VetId::from_string(&id).map_err(VetError::from)?;
    let command = req.try_into_command()?;

    state
        .vet_service
        .update_vet(&actor.id, &vet_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref vet| ApiSuccess::new(StatusCode::OK, vet.into()))
}
