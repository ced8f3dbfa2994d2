use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::category::models::CategoryId;
use crate::domain::notebook::models::NewNoteBook;
use crate::domain::notebook::models::NoteBody;
use crate::domain::notebook::models::NoteBook;
use crate::domain::notebook::models::NoteId;
use crate::domain::notebook::models::NoteTitle;
use crate::domain::user::models::UserId;
use crate::notebook::errors::NoteBookError;
use crate::notebook::ports::NoteBookRepository;

pub struct PostgresNoteBookRepository {
    pool: PgPool,
}

impl PostgresNoteBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NoteBookRow {
    id: i64,
    title: String,
    body: String,
    user_id: i64,
    category_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteBookRow {
    fn into_notebook(self) -> Result<NoteBook, NoteBookError> {
        Ok(NoteBook {
            id: NoteId(self.id),
            title: NoteTitle::new(self.title)?,
            body: NoteBody::new(self.body)?,
            user_id: UserId(self.user_id),
            category_id: CategoryId(self.category_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl NoteBookRepository for PostgresNoteBookRepository {
    async fn create(&self, notebook: NewNoteBook) -> Result<NoteBook, NoteBookError> {
        let row = sqlx::query_as::<_, NoteBookRow>(
            r#"
            INSERT INTO notebooks (title, body, user_id, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, body, user_id, category_id, created_at, updated_at
            "#,
        )
        .bind(notebook.title.as_str())
        .bind(notebook.body.as_str())
        .bind(notebook.user_id.0)
        .bind(notebook.category_id.0)
        .bind(notebook.created_at)
        .bind(notebook.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| NoteBookError::DatabaseError(e.to_string()))?;

        row.into_notebook()
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<NoteBook>, NoteBookError> {
        let row = sqlx::query_as::<_, NoteBookRow>(
            r#"
            SELECT id, title, body, user_id, category_id, created_at, updated_at
            FROM notebooks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| NoteBookError::DatabaseError(e.to_string()))?;

        row.map(NoteBookRow::into_notebook).transpose()
    }

    async fn find_by_id_and_user(
        &self,
        id: NoteId,
        user_id: UserId,
    ) -> Result<Option<NoteBook>, NoteBookError> {
        let row = sqlx::query_as::<_, NoteBookRow>(
            r#"
            SELECT id, title, body, user_id, category_id, created_at, updated_at
            FROM notebooks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| NoteBookError::DatabaseError(e.to_string()))?;

        row.map(NoteBookRow::into_notebook).transpose()
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<NoteBook>, NoteBookError> {
        let rows = sqlx::query_as::<_, NoteBookRow>(
            r#"
            SELECT id, title, body, user_id, category_id, created_at, updated_at
            FROM notebooks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| NoteBookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(NoteBookRow::into_notebook).collect()
    }

    async fn update(&self, notebook: &NoteBook) -> Result<(), NoteBookError> {
        let result = sqlx::query(
            r#"
            UPDATE notebooks
            SET title = $2, body = $3, category_id = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(notebook.id.0)
        .bind(notebook.title.as_str())
        .bind(notebook.body.as_str())
        .bind(notebook.category_id.0)
        .bind(notebook.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| NoteBookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(NoteBookError::NotFound(notebook.id.0));
        }

        Ok(())
    }

    async fn delete(&self, id: NoteId) -> Result<(), NoteBookError> {
        let result = sqlx::query("DELETE FROM notebooks WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| NoteBookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(NoteBookError::NotFound(id.0));
        }

        Ok(())
    }
}
