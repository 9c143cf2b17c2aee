//! Chat service: the three operations the relay exposes.
//!
//! ChatService coordinates the user and message repositories with the reply
//! generator: resolving the current user, reading history, and handling one
//! inbound message (persist it, generate a reply, persist the reply).

use relay_types::error::{ChatError, RepositoryError};
use relay_types::message::{InboundMessage, Message, MessageRole, NewMessage};
use relay_types::user::{SeedUsers, User};
use tracing::{debug, info};

use crate::channel;
use crate::reply::ReplyGenerator;
use crate::repository::message::MessageRepository;
use crate::repository::user::UserRepository;
use crate::seed;

/// Orchestrates reads and the inbound-message round trip.
///
/// Generic over the repositories and reply generator so relay-core never
/// depends on relay-infra.
pub struct ChatService<U: UserRepository, M: MessageRepository, R: ReplyGenerator> {
    users: U,
    messages: M,
    reply: R,
    seeds: SeedUsers,
}

impl<U: UserRepository, M: MessageRepository, R: ReplyGenerator> ChatService<U, M, R> {
    pub fn new(users: U, messages: M, reply: R, seeds: SeedUsers) -> Self {
        Self {
            users,
            messages,
            reply,
            seeds,
        }
    }

    /// Access the message repository.
    pub fn messages(&self) -> &M {
        &self.messages
    }

    /// Insert the configured seed users if fewer than two users exist.
    pub async fn seed(&self) -> Result<usize, RepositoryError> {
        seed::seed_users(&self.users, &self.seeds).await
    }

    /// The user a client acts as: the lowest-id user (the seeded human).
    pub async fn current_user(&self) -> Result<User, ChatError> {
        self.users.first().await?.ok_or(ChatError::NoUsers)
    }

    /// Id used for plain-text channel frames.
    pub async fn default_sender(&self) -> Result<i64, ChatError> {
        Ok(self.current_user().await?.id)
    }

    /// Message history ordered by `created_at` ascending.
    ///
    /// With a user id, the user must exist and only messages it sent or
    /// received are returned.
    pub async fn history(&self, user_id: Option<i64>) -> Result<Vec<Message>, ChatError> {
        match user_id {
            None => Ok(self.messages.list().await?),
            Some(id) => {
                self.require_user(id).await?;
                Ok(self.messages.list_for_user(id).await?)
            }
        }
    }

    /// Persist an inbound message, generate a bot reply, persist the reply,
    /// and return the stored reply.
    ///
    /// Both participants are resolved before anything is written, so a
    /// rejected message leaves no rows behind. Each insert runs in its own
    /// transaction.
    pub async fn handle_inbound(&self, inbound: InboundMessage) -> Result<Message, ChatError> {
        channel::validate(&inbound)?;

        let sender = self.require_user(inbound.user_id).await?;
        let bot = self
            .users
            .find_by_name(&self.seeds.bot_name)
            .await?
            .ok_or_else(|| ChatError::BotNotFound(self.seeds.bot_name.clone()))?;
        if sender.id == bot.id {
            return Err(ChatError::BadRequest(
                "the bot cannot send messages to itself".to_string(),
            ));
        }

        let user_msg = self
            .messages
            .insert(&NewMessage {
                role: MessageRole::User,
                content: inbound.content,
                origin_user: sender.id,
                destination_user: bot.id,
            })
            .await?;
        debug!(message_id = user_msg.id, user_id = sender.id, "Saved user message");

        let text = self.reply.generate();

        let bot_msg = self
            .messages
            .insert(&NewMessage {
                role: MessageRole::Bot,
                content: text,
                origin_user: bot.id,
                destination_user: sender.id,
            })
            .await?;
        info!(
            user_message_id = user_msg.id,
            bot_message_id = bot_msg.id,
            user_id = sender.id,
            "Bot replied"
        );

        Ok(bot_msg)
    }

    async fn require_user(&self, id: i64) -> Result<User, ChatError> {
        self.users.get(id).await?.ok_or(ChatError::UserNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::{MemoryMessageRepository, MemoryUserRepository};

    struct FixedReply(&'static str);

    impl ReplyGenerator for FixedReply {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }

    type TestService = ChatService<MemoryUserRepository, MemoryMessageRepository, FixedReply>;

    fn service_with(names: &[&str]) -> TestService {
        ChatService::new(
            MemoryUserRepository::with_names(names),
            MemoryMessageRepository::default(),
            FixedReply("Lorem ipsum."),
            SeedUsers::default(),
        )
    }

    fn hello(user_id: i64) -> InboundMessage {
        InboundMessage {
            content: "hello".to_string(),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_current_user_is_lowest_id() {
        let service = service_with(&["Alice", "Bot"]);
        let user = service.current_user().await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn test_current_user_without_users() {
        let service = service_with(&[]);
        let err = service.current_user().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_handle_inbound_persists_user_then_bot() {
        let service = service_with(&["Alice", "Bot"]);
        let reply = service.handle_inbound(hello(1)).await.unwrap();

        assert_eq!(reply.role, MessageRole::Bot);
        assert_eq!(reply.content, "Lorem ipsum.");
        assert_eq!(reply.origin_user, 2);
        assert_eq!(reply.destination_user, 1);

        let stored = service.messages().all();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].role, MessageRole::User);
        assert_eq!(stored[0].content, "hello");
        assert_eq!(stored[0].origin_user, 1);
        assert_eq!(stored[0].destination_user, 2);
        assert_eq!(stored[1], reply);
    }

    #[tokio::test]
    async fn test_handle_inbound_unknown_sender_persists_nothing() {
        let service = service_with(&["Alice", "Bot"]);
        let err = service.handle_inbound(hello(99)).await.unwrap_err();
        assert!(matches!(err, ChatError::UserNotFound(99)));
        assert!(service.messages().all().is_empty());
    }

    #[tokio::test]
    async fn test_handle_inbound_missing_bot_persists_nothing() {
        let service = service_with(&["Alice"]);
        let err = service.handle_inbound(hello(1)).await.unwrap_err();
        assert!(matches!(err, ChatError::BotNotFound(ref name) if name == "Bot"));
        assert!(service.messages().all().is_empty());
    }

    #[tokio::test]
    async fn test_handle_inbound_from_bot_rejected() {
        let service = service_with(&["Alice", "Bot"]);
        let err = service.handle_inbound(hello(2)).await.unwrap_err();
        assert!(matches!(err, ChatError::BadRequest(_)));
        assert!(service.messages().all().is_empty());
    }

    #[tokio::test]
    async fn test_handle_inbound_blank_content_rejected() {
        let service = service_with(&["Alice", "Bot"]);
        let inbound = InboundMessage {
            content: " ".to_string(),
            user_id: 1,
        };
        let err = service.handle_inbound(inbound).await.unwrap_err();
        assert!(matches!(err, ChatError::BadRequest(_)));
        assert!(service.messages().all().is_empty());
    }

    #[tokio::test]
    async fn test_history_ordered_ascending() {
        let service = service_with(&["Alice", "Bot"]);
        service.handle_inbound(hello(1)).await.unwrap();
        service.handle_inbound(hello(1)).await.unwrap();

        let history = service.history(None).await.unwrap();
        assert_eq!(history.len(), 4);
        assert!(history.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_history_for_user_filters() {
        let service = service_with(&["Alice", "Bot", "Carol"]);
        service.handle_inbound(hello(1)).await.unwrap();
        service.handle_inbound(hello(3)).await.unwrap();

        let carol = service.history(Some(3)).await.unwrap();
        assert_eq!(carol.len(), 2);
        assert!(carol.iter().all(|m| m.origin_user == 3 || m.destination_user == 3));

        let bot = service.history(Some(2)).await.unwrap();
        assert_eq!(bot.len(), 4);
    }

    #[tokio::test]
    async fn test_history_for_unknown_user_not_found() {
        let service = service_with(&["Alice", "Bot"]);
        let err = service.history(Some(42)).await.unwrap_err();
        assert!(matches!(err, ChatError::UserNotFound(42)));
    }

    #[tokio::test]
    async fn test_seed_through_service() {
        let service = service_with(&[]);
        assert_eq!(service.seed().await.unwrap(), 2);
        assert_eq!(service.seed().await.unwrap(), 0);
        assert_eq!(service.default_sender().await.unwrap(), 1);
    }
}
