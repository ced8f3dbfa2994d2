use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::UserData;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

#[derive(Debug, Clone, Deserialize)]
pub struct GetUserParams {
    id: i64,
}

pub async fn get_user_by_id(
    State(state): State<AppState>,
    Query(params): Query<GetUserParams>,
) -> Result<Json<UserData>, ApiError> {
    state
        .user_service
        .get_user(UserId(params.id))
        .await
        .map_err(ApiError::from)
        .map(|ref user| Json(user.into()))
}
