use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::UserData;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

/// HTTP request body for replacing a user's password (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    id: i64,
    password: String,
}

pub async fn change_password(
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = ChangePasswordCommand {
        id: UserId(body.id),
        password: body.password,
    };

    state
        .user_service
        .change_password(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, messages::PASSWORD_CHANGED, user.into()))
}
