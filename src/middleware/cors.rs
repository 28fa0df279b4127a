//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers; native and server-to-server callers are
//!   not restricted by it.
//! - Applied at the Router level, not inside handlers.
//!
//! Policy:
//! - Development: permissive (Allow-Origin: *), WITHOUT credentials.
//! - Production: allowlist origins from Config, WITHOUT credentials.
//! - The Authorization response header is exposed so browser clients can
//!   read the token issued by /login.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

/// Apply the CORS policy to the given Router.
///
/// IMPORTANT:
/// - Never combine wildcard origin (`Any`) with `allow_credentials(true)`.
pub fn apply(router: Router, config: &Config) -> Router {
    let cors = if config.app_env.is_production() {
        // Allow only configured origins (exact match). An empty allowlist
        // intentionally allows none, which is safer than allowing all.
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
    } else {
        CorsLayer::new().allow_origin(Any)
    }
    .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
    .expose_headers([header::AUTHORIZATION])
    .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
