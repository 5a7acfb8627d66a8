use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::vet::errors::VetError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// OAuth2 password grant login.
///
/// A token is issued only after the credential hasher accepts the password.
/// Every credential failure gets the same 400 response.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let vet = state
        .vet_service
        .authenticate(&form.username, &form.password)
        .await
        .map_err(|e| match e {
            VetError::InvalidCredentials => {
                ApiError::BadRequest("Invalid username or password".to_string())
            }
            other => ApiError::from(other),
        })?;

    let issued = state
        .authenticator
        .issue_token(vet.username.as_str())
        .map_err(|e| {
            tracing::error!(error = %e, "Token issuance failed");
            ApiError::InternalServerError("Internal server error".to_string())
        })?;

    tracing::info!(
        vet_id = %vet.id,
        username = %vet.username,
        expires_at = issued.expires_at,
        "Vet logged in"
    );

    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: issued.token_type.to_string(),
    }))
}

/// `application/x-www-form-urlencoded` login body. Extra grant fields such as
/// `grant_type` and `scope` are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
