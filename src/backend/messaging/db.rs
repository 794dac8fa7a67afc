//! Database operations for messaging
//!
//! Postgres persistence of the `messages` table (see
//! `migrations/0001_create_messages.sql`).

use chrono::Utc;
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::backend::messaging::store::MessageStore;
use crate::shared::Message;

fn message_from_row(row: &PgRow) -> Message {
    Message {
        id: row.get("id"),
        sender: row.get("sender"),
        text: row.get("text"),
        timestamp: row.get("timestamp"),
    }
}

/// Insert a message and return the stored row
pub async fn insert_message(pool: &PgPool, sender: &str, text: &str) -> Result<Message, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(
        r#"
        INSERT INTO messages (sender, text, timestamp)
        VALUES ($1, $2, $3)
        RETURNING id, sender, text, timestamp
        "#
    )
    .bind(sender)
    .bind(text)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(message_from_row(&row))
}

/// Load every message, oldest first
pub async fn load_messages(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, sender, text, timestamp
        FROM messages
        ORDER BY id ASC
        "#
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(message_from_row).collect())
}

/// `MessageStore` backed by a Postgres pool
#[derive(Debug, Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn append(&self, sender: &str, text: &str) -> Result<Message, sqlx::Error> {
        insert_message(&self.pool, sender, text).await
    }

    async fn list(&self) -> Result<Vec<Message>, sqlx::Error> {
        load_messages(&self.pool).await
    }
}
