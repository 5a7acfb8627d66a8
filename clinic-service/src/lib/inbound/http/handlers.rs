use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::animal::errors::AnimalError;
use crate::domain::treatment::errors::TreatmentError;
use crate::domain::vet::errors::VetError;

pub mod animals;
pub mod treatments;
pub mod vets;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    Unauthorized(String),
}

/// Single message for every authentication failure.
pub const UNAUTHENTICATED_MESSAGE: &str = "Could not validate credentials";

impl ApiError {
    pub fn unauthenticated() -> Self {
        ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string())
    }

    fn internal(context: &str, detail: String) -> Self {
        tracing::error!(error = %detail, "{}", context);
        ApiError::InternalServerError("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let mut response =
            (status, Json(ApiResponseBody::new_error(status, message))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<VetError> for ApiError {
    fn from(err: VetError) -> Self {
        match err {
            VetError::NotFound(_) | VetError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            VetError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest("Username already registered".to_string())
            }
            VetError::InvalidCredentials | VetError::UsernameChangeNotAllowed => {
                ApiError::BadRequest(err.to_string())
            }
            VetError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            VetError::InvalidVetId(_) => ApiError::BadRequest(err.to_string()),
            VetError::InvalidUsername(_) | VetError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            VetError::Password(_) | VetError::DatabaseError(_) => {
                ApiError::internal("Vet operation failed", err.to_string())
            }
        }
    }
}

impl From<AnimalError> for ApiError {
    fn from(err: AnimalError) -> Self {
        match err {
            AnimalError::NotFound(_) => ApiError::NotFound("Animal not found".to_string()),
            AnimalError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            AnimalError::InvalidAnimalId(_) => ApiError::BadRequest(err.to_string()),
            AnimalError::InvalidDetails(_) => ApiError::UnprocessableEntity(err.to_string()),
            AnimalError::DatabaseError(_) => {
                ApiError::internal("Animal operation failed", err.to_string())
            }
        }
    }
}

impl From<TreatmentError> for ApiError {
    fn from(err: TreatmentError) -> Self {
        match err {
            TreatmentError::NotFound(_) => ApiError::NotFound("Treatment not found".to_string()),
            TreatmentError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            TreatmentError::InvalidTreatmentId(_) | TreatmentError::InvalidAnimalId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            TreatmentError::InvalidDetails(_) => ApiError::UnprocessableEntity(err.to_string()),
            TreatmentError::DatabaseError(_) => {
                ApiError::internal("Treatment operation failed", err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Body for operations that only confirm what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
