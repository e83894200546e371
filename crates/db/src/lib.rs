//! Kadro persistence layer.
//!
//! Exposes the connection pool helpers plus [`models`] (row structs and
//! DTOs) and [`repositories`] (zero-sized structs with async CRUD methods
//! taking `&PgPool`).

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Convenience alias used by the API crate's shared state.
pub type DbPool = PgPool;

/// Create a PostgreSQL connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
