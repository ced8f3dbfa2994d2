use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::messages;
use crate::inbound::http::router::AppState;

/// Verified identity stored in request extensions after token validation.
///
/// Handlers do not derive ownership scoping from this; queries are scoped by
/// the client-supplied userId parameter, preserving the reference behavior.
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller {
    pub username: String,
    pub claims: auth::Claims,
}

/// Middleware gating protected routes behind a valid bearer token.
///
/// Rejection terminates the request with 401 before any handler runs; no
/// claim details are included in the response.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        ApiError::Unauthorized(messages::TOKEN_REJECTED.to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedCaller {
        username: claims.sub.clone(),
        claims,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized(messages::AUTH_HEADER_MISSING.to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized(messages::AUTH_HEADER_INVALID.to_string()).into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err(
            ApiError::Unauthorized(messages::AUTH_HEADER_INVALID.to_string()).into_response()
        );
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
