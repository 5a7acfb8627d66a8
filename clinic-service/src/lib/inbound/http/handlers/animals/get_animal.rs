use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::AnimalData;
use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::AnimalId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
) -> Result<ApiSuccess<AnimalData>, ApiError> {
    let animal_id = AnimalId::from_string(&animal_id).map_err(AnimalError::from)?;

    state
        .animal_service
        .get_animal(&animal_id)
        .await
        .map_err(ApiError::from)
        .map(|ref animal| ApiSuccess::new(StatusCode::OK, animal.into()))
}
