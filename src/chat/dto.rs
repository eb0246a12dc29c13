use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::chat::repo::{ChatSession, Message};

/// Inbound chat turn. Fields are optional so presence can be checked by the
/// handler and answered with 400 instead of a body-rejection error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: Option<String>,
    pub chat_session_id: Option<Uuid>,
}

/// A fresh session with its seeded bot greeting.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: OffsetDateTime,
    pub messages: Vec<Message>,
}

impl SessionResponse {
    pub fn new(session: ChatSession, messages: Vec<Message>) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            messages,
        }
    }
}

/// One completed turn: the visitor's message and the bot's reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub user_message: Message,
    pub bot_message: Message,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_request_tolerates_missing_fields() {
        let req: SendMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.content.is_none());
        assert!(req.chat_session_id.is_none());

        let req: SendMessageRequest =
            serde_json::from_str(r#"{"content":"hello","chatSessionId":"00000000-0000-0000-0000-000000000000"}"#)
                .unwrap();
        assert_eq!(req.content.as_deref(), Some("hello"));
        assert!(req.chat_session_id.is_some());
    }

    #[test]
    fn chat_turn_serializes_camel_case() {
        let now = OffsetDateTime::now_utc();
        let session_id = Uuid::new_v4();
        let turn = ChatTurn {
            user_message: Message {
                id: Uuid::new_v4(),
                chat_session_id: session_id,
                content: "hello".into(),
                is_bot: false,
                created_at: now,
            },
            bot_message: Message {
                id: Uuid::new_v4(),
                chat_session_id: session_id,
                content: "Hello! How can I help?".into(),
                is_bot: true,
                created_at: now,
            },
        };
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("userMessage"));
        assert!(json.contains("botMessage"));
        assert!(json.contains("isBot"));
        assert!(json.contains("chatSessionId"));
    }
}
