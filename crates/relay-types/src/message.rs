//! Chat message types for Relay.
//!
//! These types model the append-only message log between the human
//! participant and the bot: stored rows, rows about to be inserted,
//! inbound channel payloads, and the JSON shape pushed to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who authored a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (role IN ('user', 'bot'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "bot" => Ok(MessageRole::Bot),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A persisted chat message.
///
/// `created_at` is assigned by the store at insert time; history is ordered
/// by it ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    pub origin_user: i64,
    pub destination_user: i64,
    pub created_at: DateTime<Utc>,
}

/// A message row before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub role: MessageRole,
    pub content: String,
    pub origin_user: i64,
    pub destination_user: i64,
}

/// A message received on the duplex channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InboundMessage {
    pub content: String,
    pub user_id: i64,
}

/// JSON representation of a message sent to clients.
///
/// `user_id` mirrors `origin_user` for clients that predate the
/// origin/destination split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePayload {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    pub origin_user: i64,
    pub destination_user: i64,
    pub user_id: i64,
    pub created_at: String,
}

impl From<&Message> for MessagePayload {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id,
            role: m.role,
            content: m.content.clone(),
            origin_user: m.origin_user,
            destination_user: m.destination_user,
            user_id: m.origin_user,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

impl From<Message> for MessagePayload {
    fn from(m: Message) -> Self {
        Self::from(&m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Bot] {
            let parsed: MessageRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_message_role_rejects_assistant() {
        let err = "assistant".parse::<MessageRole>().unwrap_err();
        assert!(err.contains("assistant"));
    }

    #[test]
    fn test_payload_mirrors_origin_as_user_id() {
        let msg = Message {
            id: 3,
            role: MessageRole::Bot,
            content: "Lorem ipsum.".to_string(),
            origin_user: 2,
            destination_user: 1,
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        };
        let json = serde_json::to_value(MessagePayload::from(&msg)).unwrap();
        assert_eq!(json["role"], "bot");
        assert_eq!(json["user_id"], 2);
        assert_eq!(json["destination_user"], 1);
        assert_eq!(json["created_at"], "2026-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_inbound_message_requires_both_fields() {
        let ok: Result<InboundMessage, _> =
            serde_json::from_str(r#"{"content": "hi", "user_id": 1}"#);
        assert!(ok.is_ok());

        let missing: Result<InboundMessage, _> = serde_json::from_str(r#"{"content": "hi"}"#);
        assert!(missing.is_err());
    }
}
