use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::NoteBookData;
use crate::domain::category::models::CategoryId;
use crate::domain::notebook::models::CreateNoteBookCommand;
use crate::domain::notebook::models::NoteBody;
use crate::domain::notebook::models::NoteTitle;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;
use crate::notebook::errors::NoteBookError;
use crate::notebook::ports::NoteBookServicePort;

pub async fn insert_notebook(
    State(state): State<AppState>,
    Json(body): Json<InsertNoteBookRequest>,
) -> Result<ApiSuccess<NoteBookData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .notebook_service
        .create_notebook(command)
        .await
        .map_err(ApiError::from)
        .map(|ref notebook| ApiSuccess::new(StatusCode::OK, messages::NOTE_CREATED, notebook.into()))
}

/// HTTP request body for creating a note (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct InsertNoteBookRequest {
    title: String,
    body: String,
    user_id: i64,
    category_id: i64,
}

impl InsertNoteBookRequest {
    fn try_into_command(self) -> Result<CreateNoteBookCommand, NoteBookError> {
        let title = NoteTitle::new(self.title)?;
        let body = NoteBody::new(self.body)?;

        Ok(CreateNoteBookCommand {
            title,
            body,
            user_id: UserId(self.user_id),
            category_id: CategoryId(self.category_id),
        })
    }
}
