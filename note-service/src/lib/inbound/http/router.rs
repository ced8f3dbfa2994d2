use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authentication::get_token;
use super::handlers::categories::delete_category;
use super::handlers::categories::get_all_categories;
use super::handlers::categories::get_category_by_id;
use super::handlers::categories::insert_category;
use super::handlers::categories::update_category;
use super::handlers::notebooks::delete_notebook;
use super::handlers::notebooks::get_all_notebooks;
use super::handlers::notebooks::get_notebook_by_id;
use super::handlers::notebooks::insert_notebook;
use super::handlers::notebooks::update_notebook;
use super::handlers::users::change_password;
use super::handlers::users::delete_user;
use super::handlers::users::get_all_users;
use super::handlers::users::get_user_by_id;
use super::handlers::users::insert_user;
use super::handlers::users::update_user;
use super::handlers::users::user_login;
use super::middleware::authenticate as auth_middleware;
use crate::domain::category::service::CategoryService;
use crate::domain::notebook::service::NoteBookService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresCategoryRepository;
use crate::outbound::repositories::PostgresNoteBookRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    pub notebook_service: Arc<NoteBookService<PostgresNoteBookRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    notebook_service: Arc<NoteBookService<PostgresNoteBookRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        category_service,
        notebook_service,
        authenticator,
    };

    let public_routes = Router::new().route("/Authentication/GetToken", post(get_token));

    let user_routes = Router::new()
        .route("/Users/Insert", post(insert_user))
        .route("/Users/Delete", delete(delete_user))
        .route("/Users/Update", put(update_user))
        .route("/Users/ChangePassword", put(change_password))
        .route("/Users/UserLogin", post(user_login))
        .route("/Users/GetById", get(get_user_by_id))
        .route("/Users/GetAll", get(get_all_users));

    let category_routes = Router::new()
        .route("/Categories/Insert", post(insert_category))
        .route("/Categories/Delete", delete(delete_category))
        .route("/Categories/Update", put(update_category))
        .route("/Categories/GetById", get(get_category_by_id))
        .route("/Categories/GetAll", get(get_all_categories));

    let notebook_routes = Router::new()
        .route("/NoteBooks/Insert", post(insert_notebook))
        .route("/NoteBooks/Delete", delete(delete_notebook))
        .route("/NoteBooks/Update", put(update_notebook))
        .route("/NoteBooks/GetById", get(get_notebook_by_id))
        .route("/NoteBooks/GetAll", get(get_all_notebooks));

    let protected_routes = Router::new()
        .merge(user_routes)
        .merge(category_routes)
        .merge(notebook_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
