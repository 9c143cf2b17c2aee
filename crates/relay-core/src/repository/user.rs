//! User repository trait definition.

use relay_types::error::RepositoryError;
use relay_types::user::User;

/// Repository trait for chat participants.
///
/// Implementations live in relay-infra (e.g., `SqliteUserRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait UserRepository: Send + Sync {
    /// Count all users.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;

    /// Insert a user and return the stored row.
    fn insert(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Get a user by id.
    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// The user with the lowest id.
    fn first(&self) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// The lowest-id user with exactly this name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;
}
