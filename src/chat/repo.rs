use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Anonymous conversation container. Owns its messages; deleting a session
/// cascades to them.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: Uuid,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub chat_session_id: Uuid,
    pub content: String,
    pub is_bot: bool,
    pub created_at: OffsetDateTime,
}

impl ChatSession {
    pub async fn create(db: &PgPool) -> Result<ChatSession, sqlx::Error> {
        let session = sqlx::query_as::<_, ChatSession>(
            r#"
            INSERT INTO chat_sessions DEFAULT VALUES
            RETURNING id, created_at
            "#,
        )
        .fetch_one(db)
        .await?;
        Ok(session)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<ChatSession>, sqlx::Error> {
        let session = sqlx::query_as::<_, ChatSession>(
            r#"
            SELECT id, created_at
            FROM chat_sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(session)
    }

    pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chat_sessions")
            .fetch_one(db)
            .await?;
        Ok(count)
    }
}

impl Message {
    pub async fn create(
        db: &PgPool,
        chat_session_id: Uuid,
        content: &str,
        is_bot: bool,
    ) -> Result<Message, sqlx::Error> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (chat_session_id, content, is_bot)
            VALUES ($1, $2, $3)
            RETURNING id, chat_session_id, content, is_bot, created_at
            "#,
        )
        .bind(chat_session_id)
        .bind(content)
        .bind(is_bot)
        .fetch_one(db)
        .await?;
        Ok(message)
    }

    pub async fn list_by_session(
        db: &PgPool,
        chat_session_id: Uuid,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, chat_session_id, content, is_bot, created_at
            FROM messages
            WHERE chat_session_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(chat_session_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Newest messages first, for the admin dashboard.
    pub async fn recent(db: &PgPool, limit: i64) -> Result<Vec<Message>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, chat_session_id, content, is_bot, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
            .fetch_one(db)
            .await?;
        Ok(count)
    }
}
