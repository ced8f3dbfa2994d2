use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::notebook::models::CreateNoteBookCommand;
use crate::domain::notebook::models::NewNoteBook;
use crate::domain::notebook::models::NoteBook;
use crate::domain::notebook::models::NoteId;
use crate::domain::notebook::models::UpdateNoteBookCommand;
use crate::domain::user::models::UserId;
use crate::notebook::errors::NoteBookError;
use crate::notebook::ports::NoteBookRepository;
use crate::notebook::ports::NoteBookServicePort;

/// Domain service implementation for note operations.
pub struct NoteBookService<NR>
where
    NR: NoteBookRepository,
{
    repository: Arc<NR>,
}

impl<NR> NoteBookService<NR>
where
    NR: NoteBookRepository,
{
    /// Create a new note service with an injected repository.
    pub fn new(repository: Arc<NR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<NR> NoteBookServicePort for NoteBookService<NR>
where
    NR: NoteBookRepository,
{
    async fn create_notebook(
        &self,
        command: CreateNoteBookCommand,
    ) -> Result<NoteBook, NoteBookError> {
        let now = Utc::now();
        let notebook = NewNoteBook {
            title: command.title,
            body: command.body,
            user_id: command.user_id,
            category_id: command.category_id,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(notebook).await
    }

    async fn update_notebook(
        &self,
        command: UpdateNoteBookCommand,
    ) -> Result<NoteBook, NoteBookError> {
        let mut notebook = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or(NoteBookError::NotFound(command.id.0))?;

        notebook.title = command.title;
        notebook.body = command.body;
        notebook.category_id = command.category_id;
        notebook.updated_at = Utc::now();

        self.repository.update(&notebook).await?;

        Ok(notebook)
    }

    async fn delete_notebook(&self, id: NoteId) -> Result<NoteBook, NoteBookError> {
        let notebook = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(NoteBookError::NotFound(id.0))?;

        self.repository.delete(id).await?;

        Ok(notebook)
    }

    async fn get_notebook(&self, id: NoteId, user_id: UserId) -> Result<NoteBook, NoteBookError> {
        self.repository
            .find_by_id_and_user(id, user_id)
            .await?
            .ok_or(NoteBookError::NotFound(id.0))
    }

    async fn list_notebooks(&self, user_id: UserId) -> Result<Vec<NoteBook>, NoteBookError> {
        self.repository.list_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::category::models::CategoryId;
    use crate::domain::notebook::models::NoteBody;
    use crate::domain::notebook::models::NoteTitle;

    mock! {
        pub TestNoteBookRepository {}

        #[async_trait]
        impl NoteBookRepository for TestNoteBookRepository {
            async fn create(&self, notebook: NewNoteBook) -> Result<NoteBook, NoteBookError>;
            async fn find_by_id(&self, id: NoteId) -> Result<Option<NoteBook>, NoteBookError>;
            async fn find_by_id_and_user(&self, id: NoteId, user_id: UserId) -> Result<Option<NoteBook>, NoteBookError>;
            async fn list_by_user(&self, user_id: UserId) -> Result<Vec<NoteBook>, NoteBookError>;
            async fn update(&self, notebook: &NoteBook) -> Result<(), NoteBookError>;
            async fn delete(&self, id: NoteId) -> Result<(), NoteBookError>;
        }
    }

    fn stored_notebook(id: i64, title: &str, user_id: i64, category_id: i64) -> NoteBook {
        let now = Utc::now();
        NoteBook {
            id: NoteId(id),
            title: NoteTitle::new(title.to_string()).unwrap(),
            body: NoteBody::new("body text".to_string()).unwrap(),
            user_id: UserId(user_id),
            category_id: CategoryId(category_id),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_notebook_assigns_store_id() {
        let mut repository = MockTestNoteBookRepository::new();

        repository
            .expect_create()
            .withf(|notebook| {
                notebook.title.as_str() == "Groceries"
                    && notebook.user_id == UserId(7)
                    && notebook.category_id == CategoryId(2)
            })
            .times(1)
            .returning(|notebook| {
                Ok(NoteBook {
                    id: NoteId(11),
                    title: notebook.title,
                    body: notebook.body,
                    user_id: notebook.user_id,
                    category_id: notebook.category_id,
                    created_at: notebook.created_at,
                    updated_at: notebook.updated_at,
                })
            });

        let service = NoteBookService::new(Arc::new(repository));

        let notebook = service
            .create_notebook(CreateNoteBookCommand {
                title: NoteTitle::new("Groceries".to_string()).unwrap(),
                body: NoteBody::new("milk, eggs".to_string()).unwrap(),
                user_id: UserId(7),
                category_id: CategoryId(2),
            })
            .await
            .unwrap();

        assert_eq!(notebook.id, NoteId(11));
    }

    #[tokio::test]
    async fn test_update_notebook_moves_category() {
        let mut repository = MockTestNoteBookRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(NoteId(11)))
            .times(1)
            .returning(|_| Ok(Some(stored_notebook(11, "Groceries", 7, 2))));
        repository
            .expect_update()
            .withf(|notebook| {
                notebook.category_id == CategoryId(3) && notebook.title.as_str() == "Errands"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = NoteBookService::new(Arc::new(repository));

        let notebook = service
            .update_notebook(UpdateNoteBookCommand {
                id: NoteId(11),
                title: NoteTitle::new("Errands".to_string()).unwrap(),
                body: NoteBody::new("post office".to_string()).unwrap(),
                category_id: CategoryId(3),
            })
            .await
            .unwrap();

        assert_eq!(notebook.category_id, CategoryId(3));
    }

    #[tokio::test]
    async fn test_update_notebook_not_found() {
        let mut repository = MockTestNoteBookRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = NoteBookService::new(Arc::new(repository));

        let result = service
            .update_notebook(UpdateNoteBookCommand {
                id: NoteId(99),
                title: NoteTitle::new("Gone".to_string()).unwrap(),
                body: NoteBody::new("gone".to_string()).unwrap(),
                category_id: CategoryId(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), NoteBookError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_get_notebook_scopes_by_user() {
        let mut repository = MockTestNoteBookRepository::new();

        repository
            .expect_find_by_id_and_user()
            .with(eq(NoteId(11)), eq(UserId(8)))
            .times(1)
            .returning(|_, _| Ok(None));

        let service = NoteBookService::new(Arc::new(repository));

        let result = service.get_notebook(NoteId(11), UserId(8)).await;
        assert!(matches!(result.unwrap_err(), NoteBookError::NotFound(11)));
    }

    #[tokio::test]
    async fn test_delete_notebook_returns_removed_entity() {
        let mut repository = MockTestNoteBookRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(stored_notebook(11, "Groceries", 7, 2))));
        repository
            .expect_delete()
            .with(eq(NoteId(11)))
            .times(1)
            .returning(|_| Ok(()));

        let service = NoteBookService::new(Arc::new(repository));

        let notebook = service.delete_notebook(NoteId(11)).await.unwrap();
        assert_eq!(notebook.title.as_str(), "Groceries");
    }
}
