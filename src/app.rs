/*
 * Responsibility
 * - Config load → dependency wiring → Router assembly
 * - Middleware application (CORS, access, gate)
 * - axum::serve() startup
 */
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use axum::http::Method;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware;
use crate::services::auth::{AccessPolicy, Authenticator, PgUserStore, TokenCodec, UserStore};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise a sensible default.
    // Ex: RUST_LOG=info,loja_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    let state = build_state(db, &config);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(db: PgPool, config: &Config) -> AppState {
    // Everything here is built once and shared read-only across requests.
    let tokens = Arc::new(TokenCodec::new(
        config.jwt_secret.as_bytes(),
        Duration::from_secs(config.access_token_ttl_seconds),
    ));
    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db.clone()));
    let auth = Arc::new(Authenticator::new(users.clone(), tokens.clone()));

    AppState {
        db,
        users,
        auth,
        tokens,
        policy: Arc::new(access_policy()),
    }
}

/// Endpoint access rules, first match wins; everything not listed requires
/// an authenticated principal.
pub(crate) fn access_policy() -> AccessPolicy {
    AccessPolicy::builder()
        .public_any("/health")
        .public(Method::POST, "/login")
        .public(Method::GET, "/produtos/**")
        .public(Method::GET, "/categorias/**")
        .public(Method::GET, "/estados/**")
        // Signup is open; every other clientes operation is protected.
        .public(Method::POST, "/clientes")
        .build()
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = api::routes();
    // gate is applied first so access (applied second) wraps it and runs
    // first: verify and populate, then decide.
    let router = middleware::auth::gate::apply(router, state.clone());
    let router = middleware::auth::access::apply(router, state.clone());

    let router = router.with_state(state).layer(TraceLayer::new_for_http());
    middleware::cors::apply(router, config)
}
