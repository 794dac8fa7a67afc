/**
 * Application State Management
 *
 * `AppState` is the central state container shared by all handlers. Every
 * field is cheap to clone (`Arc` inside), and the `FromRef` implementations
 * let handlers extract only the part they need, e.g.
 * `State(store): State<Arc<dyn MessageStore>>`.
 *
 * # Thread Safety
 *
 * - The message store owns its pool (or an internal `RwLock`)
 * - The identity verifier guards its key cache with an `RwLock`
 * - The admin allow-list is immutable after startup
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::{AdminAllowList, IdentityVerifier};
use crate::backend::messaging::MessageStore;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Message persistence (Postgres or in-memory)
    pub message_store: Arc<dyn MessageStore>,

    /// Resolves bearer tokens into principals
    pub identity: Arc<dyn IdentityVerifier>,

    /// E-mail addresses allowed to list messages
    pub admins: AdminAllowList,
}

impl AppState {
    pub fn new(
        message_store: Arc<dyn MessageStore>,
        identity: Arc<dyn IdentityVerifier>,
        admins: AdminAllowList,
    ) -> Self {
        Self {
            message_store,
            identity,
            admins,
        }
    }
}

impl FromRef<AppState> for Arc<dyn MessageStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.message_store.clone()
    }
}

impl FromRef<AppState> for Arc<dyn IdentityVerifier> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.identity.clone()
    }
}
