use auth::AuthenticationError;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;

/// HTTP request body carrying the service-account credential pair (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct GetTokenRequest {
    username: String,
    password: String,
}

/// The one anonymous endpoint: exchange the configured service-account
/// credentials for a signed bearer token.
///
/// No database lookup happens here; the pair is compared for exact equality
/// against configuration. Any mismatch is a 401 with no side effects.
pub async fn get_token(
    State(state): State<AppState>,
    Json(body): Json<GetTokenRequest>,
) -> Result<Json<String>, ApiError> {
    state
        .authenticator
        .issue_token(&body.username, &body.password)
        .map(Json)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized(messages::INVALID_CREDENTIALS.to_string())
            }
            other => ApiError::InternalServerError(other.to_string()),
        })
}
