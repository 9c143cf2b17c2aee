//! Message repository trait definition.
//!
//! Messages are append-only: the trait exposes inserts and ordered reads,
//! nothing else.

use relay_types::error::RepositoryError;
use relay_types::message::{Message, NewMessage};

/// Repository trait for chat message persistence.
pub trait MessageRepository: Send + Sync {
    /// Insert a message in its own transaction and return the stored row,
    /// including the store-assigned id and `created_at`.
    fn insert(
        &self,
        message: &NewMessage,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// All messages, ordered by `created_at` ASC then id ASC.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Messages sent or received by a user, in the same order as `list`.
    fn list_for_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
