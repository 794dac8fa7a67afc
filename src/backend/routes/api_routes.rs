/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/google` - Sign-in exchange
 *
 * ## Authenticated (bearer token, checked by `auth_middleware`)
 * - `GET /api/me` - Current principal
 * - `POST /api/messages` - Append a message
 * - `GET /api/messages` - List messages (admin allow-list)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, sign_in_with_google};
use crate::backend::messaging::{append_message, list_messages};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The auth middleware is attached with `route_layer`, so it only runs for
/// the protected routes that matched; the sign-in exchange stays public.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/me", get(get_me))
        .route("/api/messages", get(list_messages).post(append_message))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router
        .route("/api/auth/google", post(sign_in_with_google))
        .merge(protected)
}
