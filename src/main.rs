//! Red Recon API server.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use red_recon::adapters::auth::JwtSessionValidator;
use red_recon::adapters::http::{build_router, ApiHandlers, Repositories, RouterSettings};
use red_recon::adapters::postgres::{
    PostgresDailyLogRepository, PostgresPartnerRepository, PostgresPeriodLogRepository, MIGRATOR,
};
use red_recon::config::{AppConfig, ConfigError, ValidationError};
use red_recon::domain::cycle::RandomTipSource;
use red_recon::telemetry::init_tracing;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialize tracing: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(err: ValidationError) -> Self {
        StartupError::Config(ConfigError::ValidationFailed(err))
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("red-recon failed to start: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server)?;

    tracing::info!(
        environment = ?config.server.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting red-recon"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    tracing::info!(database = %config.database.redacted_url(), "Connected to database");

    if config.database.run_migrations {
        MIGRATOR.run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let repos = Repositories {
        partners: Arc::new(PostgresPartnerRepository::new(pool.clone())),
        period_logs: Arc::new(PostgresPeriodLogRepository::new(pool.clone())),
        daily_logs: Arc::new(PostgresDailyLogRepository::new(pool)),
    };
    let handlers = ApiHandlers::new(
        &repos,
        Arc::new(RandomTipSource::from_entropy()),
        &config.tracking,
    );
    let auth = Arc::new(JwtSessionValidator::new(&config.auth.jwt_config()));
    let settings = RouterSettings {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: config.server.request_timeout(),
    };
    let app = build_router(handlers, auth, &settings);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
