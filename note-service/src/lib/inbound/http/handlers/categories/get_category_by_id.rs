use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::category::ports::CategoryServicePort;
use crate::domain::category::models::CategoryId;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Query parameters: `?categoryId=..&userId=..`.
///
/// The owner scope comes from the client-supplied userId, not from the
/// validated token claims; preserved reference behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoryParams {
    category_id: i64,
    user_id: i64,
}

pub async fn get_category_by_id(
    State(state): State<AppState>,
    Query(params): Query<GetCategoryParams>,
) -> Result<Json<CategoryData>, ApiError> {
    state
        .category_service
        .get_category(CategoryId(params.category_id), UserId(params.user_id))
        .await
        .map_err(ApiError::from)
        .map(|ref category| Json(category.into()))
}
