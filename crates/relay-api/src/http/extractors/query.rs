//! Query parameter extractors for list endpoints.

use serde::Deserialize;

/// Query parameters for the message history endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct MessageListQuery {
    /// Only messages sent or received by this user.
    pub user_id: Option<i64>,
}
