use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::UserData;
use crate::domain::user::models::UserLoginCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body carrying the credential pair to verify (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct UserLoginRequest {
    username: String,
    password: String,
}

/// Verify a credential pair against the store.
///
/// Success/failure signal only; tokens are issued solely by the anonymous
/// `/Authentication/GetToken` endpoint.
pub async fn user_login(
    State(state): State<AppState>,
    Json(body): Json<UserLoginRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, messages::LOGIN_SUCCEEDED, user.into()))
}

impl UserLoginRequest {
    fn try_into_command(self) -> Result<UserLoginCommand, UserError> {
        let username = Username::new(self.username)?;

        Ok(UserLoginCommand {
            username,
            password: self.password,
        })
    }
}
