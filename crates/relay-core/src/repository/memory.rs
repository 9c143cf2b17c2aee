//! In-memory repositories for service tests.

use std::sync::Mutex;

use chrono::{Duration, TimeZone, Utc};
use relay_types::error::RepositoryError;
use relay_types::message::{Message, NewMessage};
use relay_types::user::User;

use super::message::MessageRepository;
use super::user::UserRepository;

#[derive(Default)]
pub(crate) struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub(crate) fn with_names(names: &[&str]) -> Self {
        let users = names
            .iter()
            .enumerate()
            .map(|(i, name)| User {
                id: i as i64 + 1,
                name: name.to_string(),
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.name.clone())
            .collect()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.users.lock().unwrap().len() as i64)
    }

    async fn insert(&self, name: &str) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: users.len() as i64 + 1,
            name: name.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn first(&self) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().min_by_key(|u| u.id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.name == name)
            .min_by_key(|u| u.id)
            .cloned())
    }
}

#[derive(Default)]
pub(crate) struct MemoryMessageRepository {
    messages: Mutex<Vec<Message>>,
}

impl MemoryMessageRepository {
    pub(crate) fn all(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

impl MessageRepository for MemoryMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let id = messages.len() as i64 + 1;
        // One second apart so ordering assertions are unambiguous.
        let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(id);
        let stored = Message {
            id,
            role: message.role,
            content: message.content.clone(),
            origin_user: message.origin_user,
            destination_user: message.destination_user,
            created_at,
        };
        messages.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Message>, RepositoryError> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.origin_user == user_id || m.destination_user == user_id)
            .cloned()
            .collect())
    }
}
