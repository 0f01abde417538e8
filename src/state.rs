//! Application state

use sqlx::SqlitePool;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Datastore connection pool
    pub pool: SqlitePool,
}

impl AppState {
    /// Connect to the datastore and apply pending migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = SqlitePool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}
