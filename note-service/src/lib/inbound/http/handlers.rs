use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::messages;
use crate::category::errors::CategoryError;
use crate::notebook::errors::NoteBookError;
use crate::user::errors::UserError;

pub mod authentication;
pub mod categories;
pub mod notebooks;
pub mod users;

/// Response envelope for mutating endpoints: success flag, user-facing
/// message, and the affected payload (null on errors).
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

/// Successful mutating response: a status code plus the envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<Envelope<T>>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(
            status,
            Json(Envelope {
                success: true,
                message: message.to_string(),
                data: Some(data),
            }),
        )
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (
            status,
            Json(Envelope::<()> {
                success: false,
                message,
                data: None,
            }),
        )
            .into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(messages::USER_NOT_FOUND.to_string())
            }
            UserError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest(messages::USERNAME_TAKEN.to_string())
            }
            UserError::InvalidCredentials => ApiError::BadRequest(messages::LOGIN_FAILED.to_string()),
            UserError::InvalidUsername(_) => ApiError::BadRequest(err.to_string()),
            UserError::PasswordHash(_) => ApiError::InternalServerError(err.to_string()),
            // Store failures surface as 400 with the raw error text.
            UserError::DatabaseError(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => {
                ApiError::NotFound(messages::CATEGORY_NOT_FOUND.to_string())
            }
            CategoryError::InvalidName(_) => ApiError::BadRequest(err.to_string()),
            CategoryError::DatabaseError(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<NoteBookError> for ApiError {
    fn from(err: NoteBookError) -> Self {
        match err {
            NoteBookError::NotFound(_) => ApiError::NotFound(messages::NOTE_NOT_FOUND.to_string()),
            NoteBookError::InvalidTitle(_) | NoteBookError::InvalidBody(_) => {
                ApiError::BadRequest(err.to_string())
            }
            NoteBookError::DatabaseError(msg) => ApiError::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_username_maps_to_bad_request() {
        let err = ApiError::from(UserError::UsernameAlreadyExists("alice".to_string()));
        assert_eq!(err, ApiError::BadRequest(messages::USERNAME_TAKEN.to_string()));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            ApiError::from(UserError::NotFound(9)),
            ApiError::NotFound(messages::USER_NOT_FOUND.to_string())
        );
        assert_eq!(
            ApiError::from(CategoryError::NotFound(9)),
            ApiError::NotFound(messages::CATEGORY_NOT_FOUND.to_string())
        );
        assert_eq!(
            ApiError::from(NoteBookError::NotFound(9)),
            ApiError::NotFound(messages::NOTE_NOT_FOUND.to_string())
        );
    }

    #[test]
    fn test_database_error_passes_raw_text_through() {
        let err = ApiError::from(UserError::DatabaseError("constraint violated".to_string()));
        assert_eq!(err, ApiError::BadRequest("constraint violated".to_string()));
    }
}
