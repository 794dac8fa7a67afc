/**
 * Router Configuration
 *
 * Combines the API routes, static asset serving and the 404 fallback into a
 * single router, then wraps it with request tracing and CORS.
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::backend::error::not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// CORS policy for the browser frontend
///
/// `*` in the origin list allows any origin; otherwise only the listed ones.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Create the Axum router with all routes configured
///
/// 1. **API Routes**: sign-in, current principal, messages
/// 2. **Static Files**: `/static` served from `config.static_dir`
/// 3. **Fallback Handler**: JSON 404
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone());

    let router = router.nest_service("/static", ServeDir::new(&config.static_dir));

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_origins)),
        )
        .with_state(app_state)
}
