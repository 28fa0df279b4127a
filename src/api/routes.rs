/*
 * Responsibility
 * - URL structure of the API
 * - Which paths are public vs protected is decided by the access policy
 *   (app::access_policy), not here
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    auth::login,
    clientes::{create_cliente, delete_cliente, get_cliente},
    health::health,
    produtos::{create_produto, get_produto},
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/produtos", post(create_produto))
        .route("/produtos/{produto_id}", get(get_produto))
        .route("/clientes", post(create_cliente))
        .route(
            "/clientes/{cliente_id}",
            get(get_cliente).delete(delete_cliente),
        )
}
