/*
 * Responsibility
 * - SQLx operations for the clientes table
 * - Takes a PgPool, returns rows; errors surface as RepoError
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct ClienteRow {
    pub id: i64,
    pub nome: String,
    pub email: String,
}

/// Row carrying what authentication needs. The senha hash leaves this
/// module only through this type, and only toward the user store.
#[derive(FromRow)]
pub struct ClienteAuthRow {
    pub id: i64,
    pub email: String,
    pub senha: String,
    pub perfis: Vec<i32>,
}

pub async fn find_auth_by_email(
    db: &PgPool,
    email: &str,
) -> Result<Option<ClienteAuthRow>, RepoError> {
    let row = sqlx::query_as::<_, ClienteAuthRow>(
        r#"
        SELECT id, email, senha, perfis
        FROM clientes
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    nome: &str,
    email: &str,
    senha_hash: &str,
    perfis: &[i32],
) -> Result<ClienteRow, RepoError> {
    let row = sqlx::query_as::<_, ClienteRow>(
        r#"
        INSERT INTO clientes (nome, email, senha, perfis)
        VALUES ($1, $2, $3, $4)
        RETURNING id, nome, email
        "#,
    )
    .bind(nome)
    .bind(email)
    .bind(senha_hash)
    .bind(perfis)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, cliente_id: i64) -> Result<Option<ClienteRow>, RepoError> {
    let row = sqlx::query_as::<_, ClienteRow>(
        r#"
        SELECT id, nome, email
        FROM clientes
        WHERE id = $1
        "#,
    )
    .bind(cliente_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, cliente_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM clientes
        WHERE id = $1
        "#,
    )
    .bind(cliente_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
