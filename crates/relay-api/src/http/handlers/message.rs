//! Message history handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use relay_types::message::MessagePayload;

use crate::http::error::AppError;
use crate::http::extractors::query::MessageListQuery;
use crate::state::AppState;

/// GET /messages - Message history ordered by `created_at` ascending.
///
/// `?user_id=N` narrows the history to messages user N sent or received.
pub async fn list_messages(
    State(state): State<AppState>,
    query: Result<Query<MessageListQuery>, QueryRejection>,
) -> Result<Json<Vec<MessagePayload>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let messages = state.chat_service.history(query.user_id).await?;
    Ok(Json(messages.iter().map(MessagePayload::from).collect()))
}
