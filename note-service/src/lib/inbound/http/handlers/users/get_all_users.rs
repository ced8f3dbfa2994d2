use axum::extract::State;
use axum::Json;

use super::UserData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<UserData>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| Json(users.iter().map(UserData::from).collect()))
}
