use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::CategoryData;
use crate::category::ports::CategoryServicePort;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCategoryParams {
    id: i64,
}

pub async fn delete_category(
    State(state): State<AppState>,
    Query(params): Query<DeleteCategoryParams>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    state
        .category_service
        .delete_category(CategoryId(params.id))
        .await
        .map_err(ApiError::from)
        .map(|ref category| {
            ApiSuccess::new(StatusCode::OK, messages::CATEGORY_DELETED, category.into())
        })
}
