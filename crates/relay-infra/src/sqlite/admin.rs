//! Administrative operations on the relay database.

use relay_types::error::RepositoryError;

use super::pool::{run_migrations, DatabasePool};
use super::query_error;

/// Schema-level maintenance that does not belong to any repository.
pub struct SqliteAdmin {
    pool: DatabasePool,
}

impl SqliteAdmin {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Drop every table and recreate the schema from migrations.
    ///
    /// All users and messages are lost; seeding has to run again afterwards.
    pub async fn reset(&self) -> Result<(), RepositoryError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;
        // Children first so foreign keys never dangle mid-transaction.
        for table in ["messages", "users", "_sqlx_migrations"] {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
                .execute(&mut *tx)
                .await
                .map_err(query_error)?;
        }
        tx.commit().await.map_err(query_error)?;

        run_migrations(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        tracing::info!("Database reset complete");
        Ok(())
    }
}
