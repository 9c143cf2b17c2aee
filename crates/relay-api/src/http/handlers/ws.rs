//! WebSocket handler for the duplex chat channel.
//!
//! The `/ws` endpoint upgrades an HTTP connection to a WebSocket. Each text
//! frame is one inbound message: it is persisted, a bot reply is generated
//! and persisted, and the reply is pushed back as a JSON text frame. Frames
//! are handled strictly one at a time in arrival order.
//!
//! Rejected frames get an error frame and the connection stays open.
//! A close frame or a dropped connection ends the loop quietly.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use uuid::Uuid;

use relay_core::channel::parse_inbound;
use relay_types::error::ChatError;
use relay_types::message::MessagePayload;

use crate::http::error::classify;
use crate::state::AppState;

/// Error frame pushed to the client when an inbound frame is rejected.
#[derive(Debug, Serialize)]
struct ErrorFrame {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl From<&ChatError> for ErrorFrame {
    fn from(err: &ChatError) -> Self {
        let (status, code) = classify(err);
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            err.to_string()
        };
        Self {
            error: ErrorBody { code, message },
        }
    }
}

/// Upgrade an HTTP request to a WebSocket chat connection.
///
/// This is mounted at `/ws` in the router.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws_connection(socket, state))
}

async fn handle_ws_connection(socket: WebSocket, state: AppState) {
    let connection_id = Uuid::now_v7();
    let (mut ws_sender, mut ws_receiver) = socket.split();
    tracing::debug!(%connection_id, "WebSocket connected");

    while let Some(msg_result) = ws_receiver.next().await {
        let response = match msg_result {
            Ok(Message::Text(text)) => process_frame(&state, text.as_str()).await,
            Ok(Message::Binary(_)) => error_json(&ChatError::BadRequest(
                "binary frames are not supported".to_string(),
            )),
            Ok(Message::Close(_)) => break,
            // Ping/pong are answered by axum/tungstenite
            Ok(_) => continue,
            Err(err) => {
                tracing::debug!(%connection_id, "WebSocket receive error: {err}");
                break;
            }
        };

        if ws_sender.send(Message::Text(response.into())).await.is_err() {
            // Client disconnected
            break;
        }
    }

    tracing::debug!(%connection_id, "WebSocket connection closed");
}

/// Handle one inbound text frame and return the JSON frame to send back.
async fn process_frame(state: &AppState, text: &str) -> String {
    match handle_text(state, text).await {
        Ok(reply) => serde_json::to_string(&reply).unwrap_or_else(|err| {
            tracing::error!("Failed to serialize reply: {err}");
            INTERNAL_ERROR_FRAME.to_string()
        }),
        Err(err) => {
            if classify(&err).0.is_server_error() {
                tracing::error!(error = %err, "Failed to handle inbound frame");
            } else {
                tracing::debug!(error = %err, "Rejected inbound frame");
            }
            error_json(&err)
        }
    }
}

async fn handle_text(state: &AppState, text: &str) -> Result<MessagePayload, ChatError> {
    let default_sender = if state.config.channel.accept_plain_text {
        Some(state.chat_service.default_sender().await?)
    } else {
        None
    };

    let inbound = parse_inbound(text, default_sender)?;
    let reply = state.chat_service.handle_inbound(inbound).await?;
    Ok(MessagePayload::from(reply))
}

const INTERNAL_ERROR_FRAME: &str =
    r#"{"error":{"code":"INTERNAL_ERROR","message":"Failed to serialize response"}}"#;

fn error_json(err: &ChatError) -> String {
    serde_json::to_string(&ErrorFrame::from(err)).unwrap_or_else(|_| INTERNAL_ERROR_FRAME.to_string())
}
