//! Message store abstraction
//!
//! Handlers talk to a `MessageStore` rather than a pool, so the board can run
//! against Postgres (`db::PgMessageStore`) or, when no database is
//! configured, against the in-process `MemoryMessageStore`.

use chrono::Utc;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::shared::Message;

/// Append-only message persistence
///
/// Both operations are single statements: an append either stores the whole
/// row or nothing, and a list is one consistent scan ordered by `id`.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert a message stamped with the current server time
    async fn append(&self, sender: &str, text: &str) -> Result<Message, sqlx::Error>;

    /// Every message, oldest first
    async fn list(&self) -> Result<Vec<Message>, sqlx::Error>;
}

/// In-process store used when `DATABASE_URL` is not set
///
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    messages: RwLock<Vec<Message>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert(&self, sender: &str, text: &str) -> Message {
        let mut messages = self.messages.write().await;
        let id = messages.last().map_or(1, |last| last.id + 1);
        let message = Message {
            id,
            sender: sender.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
        };
        messages.push(message.clone());
        message
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn append(&self, sender: &str, text: &str) -> Result<Message, sqlx::Error> {
        Ok(self.insert(sender, text).await)
    }

    async fn list(&self) -> Result<Vec<Message>, sqlx::Error> {
        Ok(self.messages.read().await.clone())
    }
}
