use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::NoteBookData;
use crate::domain::notebook::models::NoteId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::notebook::ports::NoteBookServicePort;

/// Query parameters: `?noteId=..&userId=..`.
///
/// The owner scope comes from the client-supplied userId, not from the
/// validated token claims; preserved reference behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNoteBookParams {
    note_id: i64,
    user_id: i64,
}

pub async fn get_notebook_by_id(
    State(state): State<AppState>,
    Query(params): Query<GetNoteBookParams>,
) -> Result<Json<NoteBookData>, ApiError> {
    state
        .notebook_service
        .get_notebook(NoteId(params.note_id), UserId(params.user_id))
        .await
        .map_err(ApiError::from)
        .map(|ref notebook| Json(notebook.into()))
}
