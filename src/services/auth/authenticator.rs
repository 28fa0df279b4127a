use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::auth::password::{self, PasswordError};
use crate::services::auth::store::UserStore;
use crate::services::auth::token_codec::{SignError, TokenCodec};

/// Login credentials as submitted by the client. Transient: verified, then
/// dropped; never persisted.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub senha: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The plaintext senha must not reach logs.
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("senha", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unknown identity")]
    UnknownIdentity,

    #[error("bad secret")]
    BadSecret,

    #[error(transparent)]
    Store(#[from] RepoError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Sign(#[from] SignError),
}

/// Verifies credentials against the user store and issues access tokens.
/// Holds no mutable state; the only I/O is the store lookup.
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenCodec>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenCodec>) -> Self {
        Self { users, tokens }
    }

    /// Look up the identity, check the senha against its bcrypt hash, and on
    /// a match issue a token for the stored (canonical) email.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let principal = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::UnknownIdentity)?;

        if !password::verify_password(&credentials.senha, &principal.senha_hash).await? {
            return Err(AuthError::BadSecret);
        }

        Ok(self.tokens.issue(&principal.email)?)
    }
}
