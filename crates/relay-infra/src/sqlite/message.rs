//! SQLite message repository implementation.
//!
//! Raw queries with a private Row struct, inserts on the writer pool inside
//! a transaction, reads on the reader pool. `created_at` is filled in by the
//! column default and read back with `RETURNING`.

use chrono::{DateTime, Utc};
use relay_core::repository::message::MessageRepository;
use relay_types::error::RepositoryError;
use relay_types::message::{Message, MessageRole, NewMessage};
use sqlx::Row;

use super::pool::DatabasePool;
use super::query_error;

const MESSAGE_COLUMNS: &str = "id, role, content, origin_user, destination_user, created_at";

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Message.
struct MessageRow {
    id: i64,
    role: String,
    content: String,
    origin_user: i64,
    destination_user: i64,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            origin_user: row.try_get("origin_user")?,
            destination_user: row.try_get("destination_user")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(Message {
            id: self.id,
            role,
            content: self.content,
            origin_user: self.origin_user,
            destination_user: self.destination_user,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn rows_into_messages(rows: &[sqlx::sqlite::SqliteRow]) -> Result<Vec<Message>, RepositoryError> {
    let mut messages = Vec::with_capacity(rows.len());
    for row in rows {
        let message_row = MessageRow::from_row(row).map_err(query_error)?;
        messages.push(message_row.into_message()?);
    }
    Ok(messages)
}

impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        let row = sqlx::query(&format!(
            "INSERT INTO messages (role, content, origin_user, destination_user)
             VALUES (?, ?, ?, ?)
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(message.origin_user)
        .bind(message.destination_user)
        .fetch_one(&mut *tx)
        .await
        .map_err(query_error)?;

        let stored = MessageRow::from_row(&row)
            .map_err(query_error)?
            .into_message()?;

        tx.commit().await.map_err(query_error)?;
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows_into_messages(&rows)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages
             WHERE origin_user = ? OR destination_user = ?
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows_into_messages(&rows)
    }
}
