use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::TreatmentData;
use crate::domain::treatment::errors::TreatmentError;
use crate::domain::treatment::models::TreatmentId;
use crate::domain::treatment::models::UpdateTreatmentCommand;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a treatment (raw JSON)
///
/// Only the three clinical fields are read. Anything else in the body,
/// including `animal_id` or `vet_username`, is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateTreatmentRequest {
    pub description: Option<String>,
    pub medication: Option<String>,
    pub duration: Option<String>,
}

impl UpdateTreatmentRequest {
    fn try_into_command(self) -> Result<UpdateTreatmentCommand, TreatmentError> {
        Ok(UpdateTreatmentCommand::new(
            self.description,
            self.medication,
            self.duration,
        )?)
    }
}

pub async fn update_treatment(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Path(treatment_id): Path<String>,
    Json(req): Json<UpdateTreatmentRequest>,
) -> Result<ApiSuccess<TreatmentData>, ApiError> {
    let treatment_id = TreatmentId::from_string(&treatment_id).map_err(TreatmentError::from)?;
    let command = req.try_into_command()?;

    state
        .treatment_service
        .update_treatment(&actor, &treatment_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref treatment| ApiSuccess::new(StatusCode::OK, treatment.into()))
}
