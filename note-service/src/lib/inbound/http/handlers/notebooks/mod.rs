use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::notebook::models::NoteBook;

pub mod delete_notebook;
pub mod get_all_notebooks;
pub mod get_notebook_by_id;
pub mod insert_notebook;
pub mod update_notebook;

pub use delete_notebook::delete_notebook;
pub use get_all_notebooks::get_all_notebooks;
pub use get_notebook_by_id::get_notebook_by_id;
pub use insert_notebook::insert_notebook;
pub use update_notebook::update_notebook;

/// Wire representation of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteBookData {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&NoteBook> for NoteBookData {
    fn from(notebook: &NoteBook) -> Self {
        Self {
            id: notebook.id.0,
            title: notebook.title.as_str().to_string(),
            body: notebook.body.as_str().to_string(),
            user_id: notebook.user_id.0,
            category_id: notebook.category_id.0,
            created_at: notebook.created_at,
            updated_at: notebook.updated_at,
        }
    }
}
