use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::TreatmentData;
use crate::domain::animal::models::AnimalId;
use crate::domain::treatment::errors::TreatmentError;
use crate::domain::treatment::models::TreatmentDetails;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for recording a treatment (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTreatmentRequest {
    description: String,
    medication: String,
    duration: String,
}

pub async fn create_treatment(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Path(animal_id): Path<String>,
    Json(body): Json<CreateTreatmentRequest>,
) -> Result<ApiSuccess<TreatmentData>, ApiError> {
    let animal_id = AnimalId::from_string(&animal_id).map_err(TreatmentError::from)?;
    let details = TreatmentDetails::new(body.description, body.medication, body.duration)
        .map_err(TreatmentError::from)?;

    state
        .treatment_service
        .create_treatment(&actor, &animal_id, details)
        .await
        .map_err(ApiError::from)
        .map(|ref treatment| ApiSuccess::new(StatusCode::CREATED, treatment.into()))
}
