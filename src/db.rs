// src/db.rs

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::{config::Config, error::AppError};

const MAX_CONNECT_RETRIES: u32 = 5;

/// Opens the connection pool, retrying while the database is unavailable.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let mut retry_count = 0;
    loop {
        match SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                retry_count += 1;
                if retry_count > MAX_CONNECT_RETRIES {
                    return Err(AppError::Database(format!(
                        "Failed to connect to database after {} retries: {}",
                        MAX_CONNECT_RETRIES, e
                    )));
                }
                tracing::warn!(
                    "Database not ready, retrying in 2s... (Attempt {})",
                    retry_count
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations applied successfully.");
    Ok(())
}

/// Row count per table, in schema order.
pub async fn table_counts(pool: &SqlitePool) -> Result<Vec<(&'static str, i64)>, AppError> {
    let mut counts = Vec::new();
    for table in ["user", "post", "media", "comments", "follower"] {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM \"{}\"", table))
            .fetch_one(pool)
            .await?;
        counts.push((table, count));
    }
    Ok(counts)
}
