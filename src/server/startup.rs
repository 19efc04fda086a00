use sea_orm::{DatabaseConnection, DbErr};
use std::{net::SocketAddr, path::PathBuf};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::{Config, SeedSettings},
    error::AppError,
    router,
    seed::orchestrator::Seeder,
    state::AppState,
};

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the provided connection string, then runs all
/// pending SeaORM migrations so the collection and document tables exist. Used by both
/// the server and every seeding run.
///
/// # Arguments
/// - `database_url` - SeaORM connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Starts the HTTP server.
///
/// When the database is enabled, connects to it (failing startup if it is unreachable),
/// optionally starts a seeding run in the background and mounts the item API. Seeding
/// runs on its own connection and its outcome never stops the server.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` - The server shut down
/// - `Err(AppError)` - Database connection or listener failure
pub async fn serve(config: Config) -> Result<(), AppError> {
    let state = match &config.database {
        Some(database) => {
            let db = connect_to_database(&database.url).await?;
            tracing::info!("Connected to database");

            if database.seed_on_startup {
                spawn_startup_seed(config.seed_settings(None)?);
            }

            Some(AppState::new(db, &database.jwt_secret))
        }
        None => {
            tracing::info!("Database disabled, item API not mounted");
            None
        }
    };

    let app = router::router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Runs a single seeding pass and returns.
///
/// Fixture failures are logged in the run summary; only a fatal seeding error (no
/// connection, unreadable seeds directory) is returned.
///
/// # Arguments
/// - `config` - Application configuration
/// - `dir` - Seeds directory overriding `SEEDS_DIR`
pub async fn seed_once(config: &Config, dir: Option<PathBuf>) -> Result<(), AppError> {
    Seeder::new(config.seed_settings(dir)?).seed().await?;

    Ok(())
}

fn spawn_startup_seed(settings: SeedSettings) {
    tokio::spawn(async move {
        if let Err(err) = Seeder::new(settings).seed().await {
            tracing::error!("Startup seeding failed: {}", err);
        }
    });
}
