/**
 * Shared Types Module
 *
 * App view states and the results worker threads send back to the UI.
 */

use crate::shared::{Message, Principal};

/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Sign-in screen
    Auth,
    /// Message board
    Board,
}

/// Result of a background API call, delivered to the UI thread
#[derive(Debug, Clone)]
pub enum ApiEvent {
    /// Sign-in exchange finished; carries the ID token used as bearer
    SignedIn(Result<(String, Principal), String>),
    MessageSent(Result<(), String>),
    MessagesLoaded(Result<Vec<Message>, String>),
}
