use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::NoteBookData;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::notebook::ports::NoteBookServicePort;

/// Query parameters: `?userId=..`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNoteBooksParams {
    user_id: i64,
}

pub async fn get_all_notebooks(
    State(state): State<AppState>,
    Query(params): Query<ListNoteBooksParams>,
) -> Result<Json<Vec<NoteBookData>>, ApiError> {
    state
        .notebook_service
        .list_notebooks(UserId(params.user_id))
        .await
        .map_err(ApiError::from)
        .map(|notebooks| Json(notebooks.iter().map(NoteBookData::from).collect()))
}
