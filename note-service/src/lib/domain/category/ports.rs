use async_trait::async_trait;

use crate::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::user::models::UserId;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a new category for a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed (including an unknown
    ///   owning user)
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Update an existing category's name and description.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Delete an existing category, returning the removed entity.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed (including dependents)
    async fn delete_category(&self, id: CategoryId) -> Result<Category, CategoryError>;

    /// Retrieve a category by id, scoped to the given owner.
    ///
    /// # Errors
    /// * `NotFound` - No category with this id owned by this user
    /// * `DatabaseError` - Database operation failed
    async fn get_category(
        &self,
        id: CategoryId,
        user_id: UserId,
    ) -> Result<Category, CategoryError>;

    /// Retrieve all categories owned by the given user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_categories(&self, user_id: UserId) -> Result<Vec<Category>, CategoryError>;
}

/// Persistence operations for the category entity.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist a new category; the store assigns the id.
    async fn create(&self, category: NewCategory) -> Result<Category, CategoryError>;

    /// Retrieve a category by identifier alone (owner-independent).
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve a category by identifier and owning user.
    async fn find_by_id_and_user(
        &self,
        id: CategoryId,
        user_id: UserId,
    ) -> Result<Option<Category>, CategoryError>;

    /// Retrieve all categories owned by the given user.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Category>, CategoryError>;

    /// Write the mutable columns of an existing category.
    async fn update(&self, category: &Category) -> Result<(), CategoryError>;

    /// Remove a category from storage.
    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
}
