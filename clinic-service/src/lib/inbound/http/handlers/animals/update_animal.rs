use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::AnimalData;
use super::AnimalRequest;
use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::AnimalId;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_animal(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Path(animal_id): Path<String>,
    Json(body): Json<AnimalRequest>,
) -> Result<ApiSuccess<AnimalData>, ApiError> {
    let animal_id = AnimalId::from_string(&animal_id).map_err(AnimalError::from)?;
    let details = body.try_into_details().map_err(AnimalError::from)?;

    state
        .animal_service
        .update_animal(&actor, &animal_id, details)
        .await
        .map_err(ApiError::from)
        .map(|ref animal| ApiSuccess::new(StatusCode::OK, animal.into()))
}
