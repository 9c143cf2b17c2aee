//! User handlers.

use axum::Json;
use axum::extract::State;

use relay_types::user::User;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /users/me - The user this client acts as.
pub async fn get_current_user(State(state): State<AppState>) -> Result<Json<User>, AppError> {
    let user = state.chat_service.current_user().await?;
    Ok(Json(user))
}
