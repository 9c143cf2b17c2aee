//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and HTTP
//! handlers. ChatService is generic over repository and reply traits;
//! AppState pins it to the SQLite repositories and the lorem reply generator.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use relay_core::reply::LoremReplyGenerator;
use relay_core::service::chat::ChatService;
use relay_infra::filesystem::database_url;
use relay_infra::sqlite::admin::SqliteAdmin;
use relay_infra::sqlite::message::SqliteMessageRepository;
use relay_infra::sqlite::pool::DatabasePool;
use relay_infra::sqlite::user::SqliteUserRepository;
use relay_types::config::RelayConfig;
use relay_types::user::SeedUsers;

/// Concrete type alias for the chat service pinned to infra implementations.
pub type ConcreteChatService =
    ChatService<SqliteUserRepository, SqliteMessageRepository, LoremReplyGenerator>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub admin: Arc<SqliteAdmin>,
    pub config: Arc<RelayConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: open the database in `data_dir`
    /// and wire services.
    pub async fn init(data_dir: &Path, config: RelayConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let db_pool = DatabasePool::new(&database_url(data_dir)).await?;
        Ok(Self::from_pool(db_pool, config, data_dir.to_path_buf()))
    }

    /// Wire services over an already-open pool.
    pub fn from_pool(db_pool: DatabasePool, config: RelayConfig, data_dir: PathBuf) -> Self {
        let chat_service = ChatService::new(
            SqliteUserRepository::new(db_pool.clone()),
            SqliteMessageRepository::new(db_pool.clone()),
            LoremReplyGenerator::new(config.reply.word_count),
            SeedUsers::from(&config.seed),
        );

        Self {
            chat_service: Arc::new(chat_service),
            admin: Arc::new(SqliteAdmin::new(db_pool)),
            config: Arc::new(config),
            data_dir,
        }
    }
}
