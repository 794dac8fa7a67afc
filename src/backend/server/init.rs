/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`:
 *
 * 1. Build the identity verifier (Firebase or shared secret)
 * 2. Load the message store (Postgres if reachable, memory otherwise)
 * 3. Load the admin allow-list
 * 4. Create the router
 */

use axum::Router;

use crate::backend::auth::AdminAllowList;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_message_store, ServerConfig};
use crate::backend::server::state::AppState;
use crate::shared::ConfigError;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when no identity provider is configured. A missing database
/// is tolerated (see `load_message_store`).
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing boardkit server");

    let identity = config.identity_verifier()?;
    let message_store = load_message_store(config).await;

    let admins = AdminAllowList::new(&config.admin_emails);
    if admins.is_empty() {
        tracing::warn!("ADMIN_EMAILS is empty. Nobody can list messages.");
    } else {
        tracing::info!("Loaded {} admin addresses", admins.len());
    }

    let app_state = AppState::new(message_store, identity, admins);
    let app = create_router(app_state, config);

    tracing::info!("Router configured");
    Ok(app)
}
