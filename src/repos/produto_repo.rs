/*
 * Responsibility
 * - SQLx operations for the produtos table
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct ProdutoRow {
    pub id: i64,
    pub nome: String,
    pub preco: f64,
}

pub async fn get(db: &PgPool, produto_id: i64) -> Result<Option<ProdutoRow>, RepoError> {
    let row = sqlx::query_as::<_, ProdutoRow>(
        r#"
        SELECT id, nome, preco
        FROM produtos
        WHERE id = $1
        "#,
    )
    .bind(produto_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(db: &PgPool, nome: &str, preco: f64) -> Result<ProdutoRow, RepoError> {
    let row = sqlx::query_as::<_, ProdutoRow>(
        r#"
        INSERT INTO produtos (nome, preco)
        VALUES ($1, $2)
        RETURNING id, nome, preco
        "#,
    )
    .bind(nome)
    .bind(preco)
    .fetch_one(db)
    .await?;

    Ok(row)
}
