use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::AnimalData;
use super::AnimalRequest;
use crate::domain::animal::errors::AnimalError;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_animal(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Json(body): Json<AnimalRequest>,
) -> Result<ApiSuccess<AnimalData>, ApiError> {
    let details = body.try_into_details().map_err(AnimalError::from)?;

    state
        .animal_service
        .create_animal(&actor, details)
        .await
        .map_err(ApiError::from)
        .map(|ref animal| ApiSuccess::new(StatusCode::CREATED, animal.into()))
}
