use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::instrument;

use crate::auth::extractors::AdminUser;
use crate::chat::repo::{ChatSession, Message};
use crate::contact::repo::ContactMessage;
use crate::error::ApiError;
use crate::state::AppState;

const RECENT_MESSAGES_LIMIT: i64 = 10;

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/stats", get(stats))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_chat_sessions: i64,
    pub total_messages: i64,
    pub total_contact_messages: i64,
    pub recent_messages: Vec<Message>,
}

/// Dashboard totals plus the latest chat traffic. Admin role required.
#[instrument(skip_all)]
pub async fn stats(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<StatsResponse>, ApiError> {
    let total_chat_sessions = ChatSession::count(&state.db).await?;
    let total_messages = Message::count(&state.db).await?;
    let total_contact_messages = ContactMessage::count(&state.db).await?;
    let recent_messages = Message::recent(&state.db, RECENT_MESSAGES_LIMIT).await?;

    Ok(Json(StatsResponse {
        total_chat_sessions,
        total_messages,
        total_contact_messages,
        recent_messages,
    }))
}
