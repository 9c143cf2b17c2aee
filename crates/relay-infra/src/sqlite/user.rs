//! SQLite user repository implementation.

use relay_core::repository::user::UserRepository;
use relay_types::error::RepositoryError;
use relay_types::user::User;
use sqlx::Row;

use super::pool::DatabasePool;
use super::query_error;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: row.try_get("id").map_err(query_error)?,
        name: row.try_get("name").map_err(query_error)?,
    })
}

impl UserRepository for SqliteUserRepository {
    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        Ok(count)
    }

    async fn insert(&self, name: &str) -> Result<User, RepositoryError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        let row = sqlx::query("INSERT INTO users (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&mut *tx)
            .await
            .map_err(query_error)?;
        let user = user_from_row(&row)?;

        tx.commit().await.map_err(query_error)?;
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn first(&self) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM users ORDER BY id ASC LIMIT 1")
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM users WHERE name = ? ORDER BY id ASC LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(user_from_row).transpose()
    }
}
