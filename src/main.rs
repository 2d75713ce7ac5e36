//!
//! Sports court booking service over a JSON REST API.
//! Reads configuration from TOML file (~/.config/court-booking/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use court_booking::application::{BookingPolicy, BookingService};
use court_booking::domain::RepositoryProvider;
use court_booking::infrastructure::database::migrator::Migrator;
use court_booking::infrastructure::database::seed::seed_if_empty;
use court_booking::infrastructure::database::SeaOrmRepositoryProvider;
use court_booking::{create_router, default_config_path, init_database, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("BOOKING_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            // Env overrides still apply so BOOKING_ADMIN_KEY works
            // without a config file.
            AppConfig::from_env()
        }
    };

    info!("Starting court booking service...");

    if app_cfg.security.require_admin_key && app_cfg.security.admin_key.is_empty() {
        warn!("Admin key gate is enabled but no admin_key is configured; every DELETE /reservas will be rejected");
    }

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    if let Err(e) = seed_if_empty(&db).await {
        error!("Failed to seed sample data: {}", e);
        return Err(e.into());
    }

    // ── Services and router ────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let booking = Arc::new(BookingService::new(
        repos.clone(),
        BookingPolicy {
            recheck_conflict_on_update: app_cfg.booking.recheck_conflict_on_update,
        },
    ));

    let router = create_router(repos, booking, app_cfg.security.clone());

    // ── Serve with graceful shutdown ───────────────────────────
    let addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Court booking service shutdown complete");
    Ok(())
}
