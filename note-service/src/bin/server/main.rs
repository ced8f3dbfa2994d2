use std::sync::Arc;

use auth::Authenticator;
use auth::ServiceCredentials;
use note_service::config::Config;
use note_service::domain::category::service::CategoryService;
use note_service::domain::notebook::service::NoteBookService;
use note_service::domain::user::service::UserService;
use note_service::inbound::http::router::create_router;
use note_service::outbound::repositories::PostgresCategoryRepository;
use note_service::outbound::repositories::PostgresNoteBookRepository;
use note_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "note_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "note-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_issuer = %config.jwt.issuer,
        jwt_audience = %config.jwt.audience,
        jwt_ttl_minutes = config.jwt.ttl_minutes,
        jwt_validate_lifetime = config.jwt.validate_lifetime,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_config = config.jwt.token_config();
    let authenticator = Arc::new(Authenticator::new(
        &token_config,
        ServiceCredentials::new(
            &config.service_account.username,
            &config.service_account.password,
        ),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pg_pool.clone()));
    let notebook_repository = Arc::new(PostgresNoteBookRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let category_service = Arc::new(CategoryService::new(category_repository));
    let notebook_service = Arc::new(NoteBookService::new(notebook_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        category_service,
        notebook_service,
        authenticator,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
