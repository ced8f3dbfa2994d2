use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::category::ports::CategoryServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Query parameters: `?userId=..`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesParams {
    user_id: i64,
}

pub async fn get_all_categories(
    State(state): State<AppState>,
    Query(params): Query<ListCategoriesParams>,
) -> Result<Json<Vec<CategoryData>>, ApiError> {
    state
        .category_service
        .list_categories(UserId(params.user_id))
        .await
        .map_err(ApiError::from)
        .map(|categories| Json(categories.iter().map(CategoryData::from).collect()))
}
