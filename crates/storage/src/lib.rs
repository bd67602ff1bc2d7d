pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::error::Result;
use crate::repository::workout::WorkoutRepository;

pub use repository::WorkoutStore;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Owns the PostgreSQL connection pool for the lifetime of the process.
///
/// Opened once at startup and handed to the repositories that need it;
/// call [`Database::close`] on shutdown so in-flight connections drain.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::connect(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn workouts(&self) -> WorkoutRepository {
        WorkoutRepository::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
