use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::category::models::Category;

pub mod delete_category;
pub mod get_all_categories;
pub mod get_category_by_id;
pub mod insert_category;
pub mod update_category;

pub use delete_category::delete_category;
pub use get_all_categories::get_all_categories;
pub use get_category_by_id::get_category_by_id;
pub use insert_category::insert_category;
pub use update_category::update_category;

/// Wire representation of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            user_id: category.user_id.0,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
