/*
 * Responsibility
 * - Produtos handlers: public read, authenticated create
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::produtos::{CreateProdutoRequest, ProdutoResponse};
use crate::api::extractors::CurrentPrincipal;
use crate::error::AppError;
use crate::repos::produto_repo;
use crate::state::AppState;

/// `GET /produtos/{id}` — public by policy; never consults the security
/// context.
pub async fn get_produto(
    State(state): State<AppState>,
    Path(produto_id): Path<i64>,
) -> Result<Json<ProdutoResponse>, AppError> {
    let row = produto_repo::get(&state.db, produto_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(ProdutoResponse {
        id: row.id,
        nome: row.nome,
        preco: row.preco,
    }))
}

/// `POST /produtos` — any authenticated principal may create.
pub async fn create_produto(
    State(state): State<AppState>,
    CurrentPrincipal(_principal): CurrentPrincipal,
    Json(req): Json<CreateProdutoRequest>,
) -> Result<(StatusCode, Json<ProdutoResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let row = produto_repo::create(&state.db, &req.nome, req.preco).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProdutoResponse {
            id: row.id,
            nome: row.nome,
            preco: row.preco,
        }),
    ))
}
