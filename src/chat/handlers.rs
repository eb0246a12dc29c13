use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::chat::classifier::{classify, pick_reply, pick_session_greeting};
use crate::chat::dto::{ChatTurn, SendMessageRequest, SessionResponse};
use crate::chat::repo::{ChatSession, Message};
use crate::error::ApiError;
use crate::state::AppState;

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/session", post(create_session))
        .route("/chat/message", post(send_message))
}

/// Open a new anonymous session, seeded with one bot greeting.
#[instrument(skip(state))]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = ChatSession::create(&state.db).await?;
    Message::create(&state.db, session.id, pick_session_greeting(), true).await?;
    let messages = Message::list_by_session(&state.db, session.id).await?;

    info!(session_id = %session.id, "chat session created");
    Ok(Json(SessionResponse::new(session, messages)))
}

/// One chat turn: persist the visitor's message, classify it, persist the
/// bot's canned reply. Exactly two inserts, user message first.
#[instrument(skip(state, payload))]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<ChatTurn>, ApiError> {
    let (content, session_id) = match (payload.content, payload.chat_session_id) {
        (Some(c), Some(id)) if !c.trim().is_empty() => (c, id),
        _ => return Err(ApiError::validation("Missing required fields")),
    };

    if ChatSession::find_by_id(&state.db, session_id).await?.is_none() {
        return Err(ApiError::NotFound("Chat session not found".into()));
    }

    let user_message = Message::create(&state.db, session_id, &content, false).await?;

    let category = classify(&content);
    let reply = pick_reply(category);
    let bot_message = Message::create(&state.db, session_id, reply, true).await?;

    info!(session_id = %session_id, category = ?category, "chat turn completed");
    Ok(Json(ChatTurn {
        user_message,
        bot_message,
    }))
}
