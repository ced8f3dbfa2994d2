use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::models::CategoryId;
use crate::domain::user::models::UserId;
use crate::notebook::errors::NoteBodyError;
use crate::notebook::errors::NoteTitleError;

/// Note entity.
///
/// Owned by exactly one user and classified under exactly one category.
#[derive(Debug, Clone)]
pub struct NoteBook {
    pub id: NoteId,
    pub title: NoteTitle,
    pub body: NoteBody,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Note fields for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewNoteBook {
    pub title: NoteTitle,
    pub body: NoteBody,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Note unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Note title value type
///
/// Required; non-empty and at most 256 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTitle(String);

impl NoteTitle {
    const MAX_LENGTH: usize = 256;

    /// Create a new valid note title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 256 characters
    pub fn new(title: String) -> Result<Self, NoteTitleError> {
        if title.trim().is_empty() {
            return Err(NoteTitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(NoteTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Note body value type; required, non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteBody(String);

impl NoteBody {
    /// Create a new valid note body.
    ///
    /// # Errors
    /// * `Empty` - Body is empty
    pub fn new(body: String) -> Result<Self, NoteBodyError> {
        if body.is_empty() {
            return Err(NoteBodyError::Empty);
        }
        Ok(Self(body))
    }

    /// Get body as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new note
#[derive(Debug)]
pub struct CreateNoteBookCommand {
    pub title: NoteTitle,
    pub body: NoteBody,
    pub user_id: UserId,
    pub category_id: CategoryId,
}

/// Command to update an existing note's title, body, and category.
#[derive(Debug)]
pub struct UpdateNoteBookCommand {
    pub id: NoteId,
    pub title: NoteTitle,
    pub body: NoteBody,
    pub category_id: CategoryId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_title_rejects_empty() {
        assert!(matches!(
            NoteTitle::new("".to_string()),
            Err(NoteTitleError::Empty)
        ));
        assert!(matches!(
            NoteTitle::new("  ".to_string()),
            Err(NoteTitleError::Empty)
        ));
    }

    #[test]
    fn test_note_title_length_bound() {
        assert!(NoteTitle::new("Shopping list".to_string()).is_ok());
        assert!(matches!(
            NoteTitle::new("x".repeat(257)),
            Err(NoteTitleError::TooLong { .. })
        ));
    }

    #[test]
    fn test_note_body_required() {
        assert!(matches!(
            NoteBody::new("".to_string()),
            Err(NoteBodyError::Empty)
        ));
        assert!(NoteBody::new("milk, eggs".to_string()).is_ok());
    }
}
