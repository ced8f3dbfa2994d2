use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::NoteBookData;
use crate::domain::category::models::CategoryId;
use crate::domain::notebook::models::NoteBody;
use crate::domain::notebook::models::NoteId;
use crate::domain::notebook::models::NoteTitle;
use crate::domain::notebook::models::UpdateNoteBookCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;
use crate::notebook::errors::NoteBookError;
use crate::notebook::ports::NoteBookServicePort;

/// HTTP request body for updating a note (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteBookRequest {
    id: i64,
    title: String,
    body: String,
    category_id: i64,
}

pub async fn update_notebook(
    State(state): State<AppState>,
    Json(body): Json<UpdateNoteBookRequest>,
) -> Result<ApiSuccess<NoteBookData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .notebook_service
        .update_notebook(command)
        .await
        .map_err(ApiError::from)
        .map(|ref notebook| ApiSuccess::new(StatusCode::OK, messages::NOTE_UPDATED, notebook.into()))
}

impl UpdateNoteBookRequest {
    fn try_into_command(self) -> Result<UpdateNoteBookCommand, NoteBookError> {
        let title = NoteTitle::new(self.title)?;
        let body = NoteBody::new(self.body)?;

        Ok(UpdateNoteBookCommand {
            id: NoteId(self.id),
            title,
            body,
            category_id: CategoryId(self.category_id),
        })
    }
}
