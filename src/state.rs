/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone is cheap: everything inside is a pool handle or an Arc
 * - All members are read-only after startup; request handling never
 *   mutates shared state
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::services::auth::{AccessPolicy, Authenticator, TokenCodec, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub users: Arc<dyn UserStore>,
    pub auth: Arc<Authenticator>,
    pub tokens: Arc<TokenCodec>,
    pub policy: Arc<AccessPolicy>,
}
