use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::vet::errors::VetError;
use crate::domain::vet::models::VetId;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn delete_vet(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let vet_id = VetId::from_string(&id).map_err(VetError::from)?;

    state.vet_service.delete_vet(&vet_id).await?;
    tracing::info!(vet_id = %vet_id, actor = %actor.username, "Vet account removed");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Vet has been deleted"),
    ))
}
