use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::TreatmentData;
use crate::domain::treatment::errors::TreatmentError;
use crate::domain::treatment::models::TreatmentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_treatment(
    State(state): State<AppState>,
    Path(treatment_id): Path<String>,
) -> Result<ApiSuccess<TreatmentData>, ApiError> {
    let treatment_id = TreatmentId::from_string(&treatment_id).map_err(TreatmentError::from)?;

    state
        .treatment_service
        .get_treatment(&treatment_id)
        .await
        .map_err(ApiError::from)
        .map(|ref treatment| ApiSuccess::new(StatusCode::OK, treatment.into()))
}
