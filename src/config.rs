use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Database used when neither `--database-url` nor `DATABASE_URL` is given.
/// `mode=rwc` lets SQLite create the file on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://finvis.db?mode=rwc";

/// Address the HTTP server binds to by default.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Upper bound on the time a single request may take.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Open the persistence handle.
///
/// The connection is owned by whoever calls this and is closed by them;
/// nothing here caches it.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database: {}", database_url);

    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    debug!("Database connection established");
    Ok(db)
}

/// Initialize application state for the given database
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    let db = connect(database_url).await?;
    Ok(AppState { db })
}
