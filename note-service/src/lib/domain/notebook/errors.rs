use thiserror::Error;

/// Error for note title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteTitleError {
    #[error("Note title must not be empty")]
    Empty,

    #[error("Note title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for note body validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteBodyError {
    #[error("Note body must not be empty")]
    Empty,
}

/// Top-level error for all note-related operations
#[derive(Debug, Clone, Error)]
pub enum NoteBookError {
    #[error("Invalid note title: {0}")]
    InvalidTitle(#[from] NoteTitleError),

    #[error("Invalid note body: {0}")]
    InvalidBody(#[from] NoteBodyError),

    #[error("Note not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
