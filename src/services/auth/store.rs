//! User store contract consumed by authentication.
//!
//! Authentication only ever needs one read: identity → stored principal.
//! The Postgres implementation sits on the clientes repo; tests swap in an
//! in-memory store so no database is required.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::{cliente_repo, error::RepoError};

/// Roles a principal may hold, persisted as stable integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn code(self) -> i32 {
        match self {
            Role::Admin => 1,
            Role::Customer => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Role::Admin),
            2 => Some(Role::Customer),
            _ => None,
        }
    }
}

/// Principal as the store holds it: identity, senha hash, roles.
/// Immutable for the duration of a request.
#[derive(Debug, Clone)]
pub struct StoredPrincipal {
    pub id: i64,
    pub email: String,
    pub senha_hash: String,
    pub roles: Vec<Role>,
}

/// Read-only lookup used by login and by token verification.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredPrincipal>, RepoError>;
}

/// Postgres-backed store over the clientes table.
#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredPrincipal>, RepoError> {
        let row = cliente_repo::find_auth_by_email(&self.db, email).await?;

        Ok(row.map(|r| StoredPrincipal {
            id: r.id,
            email: r.email,
            senha_hash: r.senha,
            // Unknown codes are dropped rather than failing the lookup.
            roles: r.perfis.into_iter().filter_map(Role::from_code).collect(),
        }))
    }
}
