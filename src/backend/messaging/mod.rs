//! Messaging Module
//!
//! The message board: the `MessageStore` seam, its Postgres and in-memory
//! implementations, and the append/list handlers.

pub mod store;
pub mod db;
pub mod handlers;

pub use store::{MemoryMessageStore, MessageStore};
pub use db::PgMessageStore;
pub use handlers::{append_message, list_messages};
