use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::vet::errors::VetError;
use crate::domain::vet::models::Username;
use crate::domain::vet::models::VetIdentity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that validates the bearer token and resolves the vet it names.
/// The resolved [`VetIdentity`] is stored in request extensions.
///
/// Every rejection produces the same 401 body so clients cannot learn which
/// check failed.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::debug!("Missing or malformed Authorization header");
        ApiError::unauthenticated()
    })?;

    let subject = state
        .authenticator
        .validate_token(&token)
        .map_err(|_| ApiError::unauthenticated())?;

    let username = Username::new(subject).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid username");
        ApiError::unauthenticated()
    })?;

    let vet = state
        .vet_service
        .get_vet_by_username(&username)
        .await
        .map_err(|e| match e {
            VetError::NotFoundByUsername(_) => {
                tracing::debug!(username = %username, "Token subject no longer exists");
                ApiError::unauthenticated()
            }
            other => ApiError::from(other),
        })?;

    req.extensions_mut().insert(VetIdentity::from(&vet));

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Option<String> {
    let value = req
        .headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}
