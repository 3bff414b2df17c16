use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use product_service::config::Config;
use product_service::domain::product::service::ProductService;
use product_service::domain::user::service::UserService;
use product_service::inbound::http::router::create_router;
use product_service::outbound::repositories::PostgresProductRepository;
use product_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "product-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        token_expiration_seconds = config.jwt.expiration_seconds,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_params(
        config.password.memory_kib,
        config.password.iterations,
        config.password.parallelism,
    )?;
    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())?.with_password_hasher(password_hasher),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
        config.jwt.expiration_seconds,
    )?);
    let product_service = Arc::new(ProductService::new(product_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, product_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    Ok(())
}
