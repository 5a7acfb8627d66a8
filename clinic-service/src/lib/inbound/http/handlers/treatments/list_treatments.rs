use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::TreatmentData;
use crate::domain::animal::models::AnimalId;
use crate::domain::treatment::errors::TreatmentError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_treatments(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
) -> Result<ApiSuccess<Vec<TreatmentData>>, ApiError> {
    let animal_id = AnimalId::from_string(&animal_id).map_err(TreatmentError::from)?;

    let treatments = state
        .treatment_service
        .list_treatments_for_animal(&animal_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        treatments.iter().map(TreatmentData::from).collect(),
    ))
}
