//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! edu-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `SITE_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string
//!
//! # Migration Files
//!
//! Stored in `crates/site/migrations/` and embedded at compile time.

use eduskills_site::db;
use tracing::info;

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run site database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing, the connection
/// fails, or a migration fails to apply.
pub async fn run() -> Result<(), MigrationError> {
    let database_url =
        super::database_url().ok_or(MigrationError::MissingEnvVar("SITE_DATABASE_URL"))?;

    info!("Connecting to site database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running site migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    info!("Site migrations complete!");
    Ok(())
}
