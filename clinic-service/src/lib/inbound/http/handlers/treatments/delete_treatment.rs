use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::treatment::errors::TreatmentError;
use crate::domain::treatment::models::TreatmentId;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn delete_treatment(
    State(state): State<AppState>,
    Extension(actor): Extension<VetIdentity>,
    Path(treatment_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let treatment_id = TreatmentId::from_string(&treatment_id).map_err(TreatmentError::from)?;

    state
        .treatment_service
        .delete_treatment(&actor, &treatment_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Treatment has been deleted"),
            )
        })
}
