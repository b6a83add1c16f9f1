use std::sync::Arc;

use auth::Authenticator;
use calendar_service::config::Config;
use calendar_service::credential::ports::CredentialServicePort;
use calendar_service::credential::service::CredentialService;
use calendar_service::inbound::http::router::create_router;
use calendar_service::repositories::InMemoryUserRepository;
use calendar_service::repositories::PostgresUserRepository;
use calendar_service::user::ports::UserRepository;
use calendar_service::user::ports::UserServicePort;
use calendar_service::user::service::UserService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calendar_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "calendar-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration rejected");
            return Err(e.into());
        }
    };

    tracing::info!(
        http_port = config.server.http_port,
        database = if config.database.url.is_some() { "postgresql" } else { "memory" },
        cors_origin = ?config.cors.allowed_origin,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let (user_service, credential_service) = match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            build_services(
                Arc::new(PostgresUserRepository::new(pg_pool)),
                authenticator,
            )
        }
        None => {
            tracing::warn!("No database url configured, users are kept in memory");
            build_services(Arc::new(InMemoryUserRepository::new()), authenticator)
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, credential_service, &config.cors);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}

fn build_services<UR: UserRepository>(
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
) -> (Arc<dyn UserServicePort>, Arc<dyn CredentialServicePort>) {
    let user_service: Arc<dyn UserServicePort> =
        Arc::new(UserService::new(Arc::clone(&repository)));
    let credential_service: Arc<dyn CredentialServicePort> =
        Arc::new(CredentialService::new(repository, authenticator));
    (user_service, credential_service)
}
