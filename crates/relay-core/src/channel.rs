//! Inbound frame parsing for the duplex channel.
//!
//! Frames are JSON objects `{"content": "...", "user_id": N}`. When
//! plain-text mode is on, anything that is not a JSON object (and does not
//! look like one) is taken verbatim as content from the default sender.

use relay_types::error::ChatError;
use relay_types::message::InboundMessage;
use serde_json::Value;

/// Parse a text frame into an inbound message.
///
/// `default_sender` enables plain-text mode: `Some(id)` attributes non-JSON
/// frames to user `id`; `None` rejects them.
pub fn parse_inbound(text: &str, default_sender: Option<i64>) -> Result<InboundMessage, ChatError> {
    let trimmed = text.trim();

    let inbound = match serde_json::from_str::<Value>(trimmed) {
        Ok(value @ Value::Object(_)) => serde_json::from_value::<InboundMessage>(value)
            .map_err(|e| ChatError::BadRequest(format!("invalid message payload: {e}")))?,
        Ok(_) => match default_sender {
            Some(user_id) => plain(text, user_id),
            None => return Err(ChatError::BadRequest("expected a JSON object".to_string())),
        },
        Err(e) => match default_sender {
            Some(user_id) if !trimmed.starts_with('{') => plain(text, user_id),
            _ => return Err(ChatError::BadRequest(format!("malformed JSON: {e}"))),
        },
    };

    validate(&inbound)?;
    Ok(inbound)
}

/// Reject messages that would persist an empty row.
pub fn validate(inbound: &InboundMessage) -> Result<(), ChatError> {
    if inbound.content.trim().is_empty() {
        return Err(ChatError::BadRequest("content must not be empty".to_string()));
    }
    Ok(())
}

fn plain(text: &str, user_id: i64) -> InboundMessage {
    InboundMessage {
        content: text.to_string(),
        user_id,
    }
}
