use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{Result, store::ViewStore};

/// SQLite-backed view store implementation.
#[derive(Clone)]
pub struct SqliteViewStore {
    pool: SqlitePool,
}

impl SqliteViewStore {
    /// Creates a new SQLite view store from an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `url` and wraps the pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(url).await?;
        Ok(Self { pool })
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }
}

#[async_trait]
impl ViewStore for SqliteViewStore {
    async fn total_count(&self) -> Result<i64> {
        // SUM over an empty table is NULL, not 0.
        let total: Option<i64> = sqlx::query_scalar("SELECT SUM(count) FROM views")
            .fetch_one(&self.pool)
            .await?;

        Ok(total.unwrap_or(0))
    }

    async fn count_for_slug(&self, slug: &str) -> Result<i64> {
        // The count column is nullable until first increment.
        let count: Option<Option<i64>> =
            sqlx::query_scalar("SELECT count FROM views WHERE slug = ?1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;

        Ok(count.flatten().unwrap_or(0))
    }

    async fn increment(&self, slug: &str) -> Result<i64> {
        // Single atomic statement; the increment is evaluated store-side and
        // the new value comes back in the same round trip.
        let count: Option<Option<i64>> = sqlx::query_scalar(
            "UPDATE views SET count = count + 1 WHERE slug = ?1 RETURNING count",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(count.flatten().unwrap_or(0))
    }
}
