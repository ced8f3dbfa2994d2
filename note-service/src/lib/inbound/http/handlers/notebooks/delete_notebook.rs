use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::NoteBookData;
use crate::domain::notebook::models::NoteId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;
use crate::notebook::ports::NoteBookServicePort;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteNoteBookParams {
    id: i64,
}

pub async fn delete_notebook(
    State(state): State<AppState>,
    Query(params): Query<DeleteNoteBookParams>,
) -> Result<ApiSuccess<NoteBookData>, ApiError> {
    state
        .notebook_service
        .delete_notebook(NoteId(params.id))
        .await
        .map_err(ApiError::from)
        .map(|ref notebook| ApiSuccess::new(StatusCode::OK, messages::NOTE_DELETED, notebook.into()))
}
