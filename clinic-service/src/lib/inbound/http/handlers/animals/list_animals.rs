use axum::extract::State;
use axum::http::StatusCode;

use super::AnimalData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_animals(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AnimalData>>, ApiError> {
    let animals = state.animal_service.list_animals().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        animals.iter().map(AnimalData::from).collect(),
    ))
}
