/**
 * Message Data Structure
 *
 * This module defines the Message struct persisted by the message board
 * and the request body used to append one.
 *
 * The Message struct is shared between the server and the desktop client,
 * so the same JSON shape is produced by `GET /api/messages` and consumed by
 * the admin view.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A single message on the board
///
/// Messages are immutable once created. The server assigns `id` and
/// `timestamp`; the `sender` is the identity-provider uid of the caller that
/// appended it.
///
/// # Fields
/// * `id` - Monotonically increasing identifier assigned by the store
/// * `sender` - Opaque identity-provider user id
/// * `text` - Free-form message body
/// * `timestamp` - Server time at insert (UTC)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub sender: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub text: String,
}

impl SendMessageRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reject bodies whose text is empty or whitespace only
    ///
    /// `text` is a required attribute of a message, so a blank string is
    /// treated the same as a missing one.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.text.trim().is_empty() {
            return Err(SharedError::validation("text", "Message text cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_json_shape() {
        let message = Message {
            id: 7,
            sender: "u1".to_string(),
            text: "hello".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["sender"], "u1");
        assert_eq!(value["text"], "hello");
        assert_eq!(value["timestamp"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_validate_accepts_text() {
        assert!(SendMessageRequest::new("hello").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        let err = SendMessageRequest::new("   \n").validate().unwrap_err();
        match err {
            SharedError::ValidationError { field, .. } => assert_eq!(field, "text"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
