use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    cache::{redis::RedisCache, Caches},
    config::Config,
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info` when it isn't set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Chooses the cache backend.
///
/// Uses Redis when a cache URL is configured and a no-op backend otherwise.
pub fn build_caches(config: &Config) -> Result<Caches, AppError> {
    match &config.cache_url {
        Some(url) => {
            tracing::info!("Caching enabled with Redis");
            Ok(Caches::new(Arc::new(RedisCache::connect(url)?)))
        }
        None => {
            tracing::info!("No cache configured, caching disabled");
            Ok(Caches::noop())
        }
    }
}
