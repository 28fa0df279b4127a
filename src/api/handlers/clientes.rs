/*
 * Responsibility
 * - Clientes handlers: public signup, self-or-admin read, admin delete
 * - Fine-grained role checks live here; coarse authentication is already
 *   settled by the middleware chain
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::clientes::{ClienteResponse, CreateClienteRequest};
use crate::api::extractors::CurrentPrincipal;
use crate::error::AppError;
use crate::repos::cliente_repo;
use crate::services::auth::{Role, password};
use crate::state::AppState;

/// `POST /clientes` — public signup. The senha is hashed before it touches
/// the database; every new cliente starts as a plain customer (roles never
/// come from the client).
pub async fn create_cliente(
    State(state): State<AppState>,
    Json(req): Json<CreateClienteRequest>,
) -> Result<(StatusCode, Json<ClienteResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let senha_hash = password::hash_password(&req.senha, None).await.map_err(|e| {
        tracing::error!(error = %e, "senha hashing failed");
        AppError::Internal
    })?;

    let row = cliente_repo::create(
        &state.db,
        &req.nome,
        &req.email,
        &senha_hash,
        &[Role::Customer.code()],
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ClienteResponse {
            id: row.id,
            nome: row.nome,
            email: row.email,
        }),
    ))
}

/// `GET /clientes/{id}` — a customer may read only their own record; admins
/// may read any.
pub async fn get_cliente(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(cliente_id): Path<i64>,
) -> Result<Json<ClienteResponse>, AppError> {
    if !principal.has_role(Role::Admin) && principal.id != cliente_id {
        return Err(AppError::Forbidden);
    }

    let row = cliente_repo::get(&state.db, cliente_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(ClienteResponse {
        id: row.id,
        nome: row.nome,
        email: row.email,
    }))
}

/// `DELETE /clientes/{id}` — admin only.
pub async fn delete_cliente(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(cliente_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !principal.has_role(Role::Admin) {
        return Err(AppError::Forbidden);
    }

    let deleted = cliente_repo::delete(&state.db, cliente_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
