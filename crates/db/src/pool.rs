//! MongoDB connection handle.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReadPreference, SelectionCriteria};
use mongodb::{Client, Database};
use tracing::{debug, info};

use crate::{DbConfig, DbError};

/// Shared handle to the configured database.
///
/// Cloning is cheap; every clone talks through the same driver pool.
pub type DbPool = Database;

/// Connect to the store named by `config` and verify the primary answers.
///
/// Intended to run once at process startup.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, DbError> {
    info!(
        "Connecting to MongoDB (database={}, timeout={:?})",
        config.database, config.timeout
    );

    let mut options = bounded(config.timeout, ClientOptions::parse(&config.uri))
        .await?
        .map_err(DbError::Connection)?;
    options.connect_timeout = Some(config.timeout);
    options.server_selection_timeout = Some(config.timeout);
    options.app_name = Some("job-listings".to_owned());

    let client = Client::with_options(options).map_err(DbError::Connection)?;
    let db = client.database(&config.database);

    ping(&db, config.timeout).await?;
    info!("MongoDB primary reachable");
    Ok(db)
}

/// Run a `ping` command against the primary.
pub async fn ping(db: &DbPool, timeout: Duration) -> Result<(), DbError> {
    let reply = bounded(
        timeout,
        db.run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary)),
    )
    .await?
    .map_err(DbError::Connection)?;
    debug!(?reply, "ping");
    Ok(())
}

/// Apply the per-call bound to a single store round trip.
pub(crate) async fn bounded<F: std::future::IntoFuture>(
    timeout: Duration,
    fut: F,
) -> Result<F::Output, DbError> {
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| DbError::Timeout(timeout))
}
