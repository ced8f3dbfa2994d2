use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::category::errors::CategoryError;
use crate::category::ports::CategoryRepository;
use crate::category::ports::CategoryServicePort;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::user::models::UserId;

/// Domain service implementation for category operations.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    /// Create a new category service with an injected repository.
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let now = Utc::now();
        let category = NewCategory {
            name: command.name,
            description: command.description,
            user_id: command.user_id,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(category).await
    }

    async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or(CategoryError::NotFound(command.id.0))?;

        category.name = command.name;
        category.description = command.description;
        category.updated_at = Utc::now();

        self.repository.update(&category).await?;

        Ok(category)
    }

    async fn delete_category(&self, id: CategoryId) -> Result<Category, CategoryError> {
        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id.0))?;

        self.repository.delete(id).await?;

        Ok(category)
    }

    async fn get_category(
        &self,
        id: CategoryId,
        user_id: UserId,
    ) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id_and_user(id, user_id)
            .await?
            .ok_or(CategoryError::NotFound(id.0))
    }

    async fn list_categories(&self, user_id: UserId) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_by_user(user_id).await
    }
}
