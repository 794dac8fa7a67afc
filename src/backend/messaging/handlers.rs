//! Messaging HTTP Handlers
//!
//! Both handlers sit behind the auth middleware. Appending is open to any
//! authenticated principal; listing is restricted to the admin allow-list.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::error::BackendError;
use crate::backend::messaging::store::MessageStore;
use crate::backend::middleware::{AdminUser, AuthUser};
use crate::shared::{Message, SendMessageRequest};

/// Append a message as the authenticated principal
///
/// `POST /api/messages` with `{ "text": "..." }`. Responds 200 with an empty
/// body; the sender is always the caller's uid. Blank or whitespace-only
/// text is rejected with 400 before the store is touched.
pub async fn append_message(
    State(store): State<Arc<dyn MessageStore>>,
    AuthUser(principal): AuthUser,
    Json(request): Json<SendMessageRequest>,
) -> Result<StatusCode, BackendError> {
    request.validate()?;

    let message = store.append(&principal.uid, &request.text).await?;
    tracing::info!(id = message.id, sender = %message.sender, "Message appended");

    Ok(StatusCode::OK)
}

/// List every message (admin only)
///
/// `GET /api/messages`. No pagination or filtering; messages are ordered by id.
pub async fn list_messages(
    State(store): State<Arc<dyn MessageStore>>,
    AdminUser(principal): AdminUser,
) -> Result<Json<Vec<Message>>, BackendError> {
    let messages = store.list().await?;
    tracing::debug!(uid = %principal.uid, count = messages.len(), "Listed messages");

    Ok(Json(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::messaging::store::MemoryMessageStore;
    use crate::shared::{Principal, SharedError};

    fn store() -> Arc<dyn MessageStore> {
        Arc::new(MemoryMessageStore::new())
    }

    #[tokio::test]
    async fn test_append_stamps_sender_from_principal() {
        let store = store();
        let status = append_message(
            State(store.clone()),
            AuthUser(Principal::new("u1", None)),
            Json(SendMessageRequest::new("hello")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::OK);

        let messages = store.list().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "u1");
        assert_eq!(messages[0].text, "hello");
    }

    #[tokio::test]
    async fn test_append_rejects_blank_text() {
        let store = store();
        let err = append_message(
            State(store.clone()),
            AuthUser(Principal::new("u1", None)),
            Json(SendMessageRequest::new("")),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, BackendError::SharedError(SharedError::ValidationError { .. })));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_messages_returns_all() {
        let store = store();
        store.append("u1", "one").await.unwrap();
        store.append("u2", "two").await.unwrap();

        let Json(messages) = list_messages(
            State(store),
            AdminUser(Principal::new("admin", Some("admin@example.com".to_string()))),
        )
        .await
        .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, "u2");
    }
}
