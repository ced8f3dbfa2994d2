use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::category::errors::CategoryError;
use crate::category::ports::CategoryServicePort;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;

pub async fn insert_category(
    State(state): State<AppState>,
    Json(body): Json<InsertCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .category_service
        .create_category(command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| {
            ApiSuccess::new(StatusCode::OK, messages::CATEGORY_CREATED, category.into())
        })
}

/// HTTP request body for creating a category (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct InsertCategoryRequest {
    name: String,
    #[serde(default)]
    description: String,
    user_id: i64,
}

impl InsertCategoryRequest {
    fn try_into_command(self) -> Result<CreateCategoryCommand, CategoryError> {
        let name = CategoryName::new(self.name)?;

        Ok(CreateCategoryCommand {
            name,
            description: self.description,
            user_id: UserId(self.user_id),
        })
    }
}
