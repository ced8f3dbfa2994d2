use async_trait::async_trait;

use crate::domain::notebook::models::CreateNoteBookCommand;
use crate::domain::notebook::models::NewNoteBook;
use crate::domain::notebook::models::NoteBook;
use crate::domain::notebook::models::NoteId;
use crate::domain::notebook::models::UpdateNoteBookCommand;
use crate::domain::user::models::UserId;
use crate::notebook::errors::NoteBookError;

/// Port for note domain service operations.
#[async_trait]
pub trait NoteBookServicePort: Send + Sync + 'static {
    /// Create a new note for a user under a category.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed (including an unknown
    ///   owning user or category)
    async fn create_notebook(
        &self,
        command: CreateNoteBookCommand,
    ) -> Result<NoteBook, NoteBookError>;

    /// Update an existing note's title, body, and category.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_notebook(
        &self,
        command: UpdateNoteBookCommand,
    ) -> Result<NoteBook, NoteBookError>;

    /// Delete an existing note, returning the removed entity.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_notebook(&self, id: NoteId) -> Result<NoteBook, NoteBookError>;

    /// Retrieve a note by id, scoped to the given owner.
    ///
    /// # Errors
    /// * `NotFound` - No note with this id owned by this user
    /// * `DatabaseError` - Database operation failed
    async fn get_notebook(&self, id: NoteId, user_id: UserId) -> Result<NoteBook, NoteBookError>;

    /// Retrieve all notes owned by the given user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_notebooks(&self, user_id: UserId) -> Result<Vec<NoteBook>, NoteBookError>;
}

/// Persistence operations for the note entity.
#[async_trait]
pub trait NoteBookRepository: Send + Sync + 'static {
    /// Persist a new note; the store assigns the id.
    async fn create(&self, notebook: NewNoteBook) -> Result<NoteBook, NoteBookError>;

    /// Retrieve a note by identifier alone (owner-independent).
    async fn find_by_id(&self, id: NoteId) -> Result<Option<NoteBook>, NoteBookError>;

    /// Retrieve a note by identifier and owning user.
    async fn find_by_id_and_user(
        &self,
        id: NoteId,
        user_id: UserId,
    ) -> Result<Option<NoteBook>, NoteBookError>;

    /// Retrieve all notes owned by the given user.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<NoteBook>, NoteBookError>;

    /// Write the mutable columns of an existing note.
    async fn update(&self, notebook: &NoteBook) -> Result<(), NoteBookError>;

    /// Remove a note from storage.
    async fn delete(&self, id: NoteId) -> Result<(), NoteBookError>;
}
