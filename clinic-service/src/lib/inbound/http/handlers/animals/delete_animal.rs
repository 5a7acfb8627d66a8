use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::AnimalId;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn delete_animal(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Path(animal_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let animal_id = AnimalId::from_string(&animal_id).map_err(AnimalError::from)?;

    state
        .animal_service
        .delete_animal(&actor, &animal_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::new("Animal has been deleted")))
}
