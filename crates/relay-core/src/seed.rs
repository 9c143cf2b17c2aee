//! Startup seeding of the baseline participants.

use relay_types::error::RepositoryError;
use relay_types::user::SeedUsers;
use tracing::{debug, info};

use crate::repository::user::UserRepository;

/// Number of users below which seeding runs.
pub const MIN_USERS: i64 = 2;

/// Insert the seed users if the store holds fewer than [`MIN_USERS`].
///
/// Only names that are not already present are inserted, so running this
/// any number of times never produces duplicate seed rows. Returns how many
/// rows were inserted.
pub async fn seed_users<U: UserRepository>(
    users: &U,
    seeds: &SeedUsers,
) -> Result<usize, RepositoryError> {
    let count = users.count().await?;
    if count >= MIN_USERS {
        debug!(count, "Already have enough users, skipping seeding");
        return Ok(0);
    }

    let mut inserted = 0;
    for name in seeds.names() {
        if users.find_by_name(name).await?.is_none() {
            let user = users.insert(name).await?;
            info!(user_id = user.id, name = %user.name, "Seeded user");
            inserted += 1;
        }
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryUserRepository;

    #[tokio::test]
    async fn test_seed_empty_store() {
        let repo = MemoryUserRepository::default();
        let inserted = seed_users(&repo, &SeedUsers::default()).await.unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(repo.names(), vec!["Alice", "Bot"]);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = MemoryUserRepository::default();
        seed_users(&repo, &SeedUsers::default()).await.unwrap();
        let second = seed_users(&repo, &SeedUsers::default()).await.unwrap();
        assert_eq!(second, 0);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_fills_in_missing_name_only() {
        let repo = MemoryUserRepository::with_names(&["Alice"]);
        let inserted = seed_users(&repo, &SeedUsers::default()).await.unwrap();
        assert_eq!(inserted, 1);
        assert_eq!(repo.names(), vec!["Alice", "Bot"]);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_enough_users() {
        let repo = MemoryUserRepository::with_names(&["Carol", "Dave"]);
        let inserted = seed_users(&repo, &SeedUsers::default()).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(repo.names(), vec!["Carol", "Dave"]);
    }
}
