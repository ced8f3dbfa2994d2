use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::category::errors::CategoryNameError;
use crate::domain::user::models::UserId;

/// Category entity.
///
/// Owned by exactly one user; notes are classified under it.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category fields for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category name value type
///
/// Required; non-empty and at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid category name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 128 characters
    pub fn new(name: String) -> Result<Self, CategoryNameError> {
        if name.trim().is_empty() {
            return Err(CategoryNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(CategoryNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new category
#[derive(Debug)]
pub struct CreateCategoryCommand {
    pub name: CategoryName,
    pub description: String,
    pub user_id: UserId,
}

/// Command to update an existing category's name and description.
#[derive(Debug)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: String,
}
