use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::category::errors::CategoryError;
use crate::category::ports::CategoryServicePort;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a category (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryRequest {
    id: i64,
    name: String,
    #[serde(default)]
    description: String,
}

pub async fn update_category(
    State(state): State<AppState>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .category_service
        .update_category(command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| {
            ApiSuccess::new(StatusCode::OK, messages::CATEGORY_UPDATED, category.into())
        })
}

impl UpdateCategoryRequest {
    fn try_into_command(self) -> Result<UpdateCategoryCommand, CategoryError> {
        let name = CategoryName::new(self.name)?;

        Ok(UpdateCategoryCommand {
            id: CategoryId(self.id),
            name,
            description: self.description,
        })
    }
}
