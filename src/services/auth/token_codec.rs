use std::fmt;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by an access token: the subject plus its validity window.
/// Nothing else goes in; the token is self-describing and never mutated.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("malformed token")]
    Malformed,
    #[error("signature mismatch")]
    SignatureInvalid,
    #[error("token expired")]
    Expired,
}

#[derive(Debug, Error)]
#[error("failed to sign access token")]
pub struct SignError(#[source] jsonwebtoken::errors::Error);

/// HS512 access-token codec over a process-wide symmetric secret.
///
/// Issues and verifies compact JWTs carrying `sub`/`iat`/`exp` only. The
/// secret is loaded once at startup and never changes at request time, so
/// the codec is freely shared across requests.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: Duration,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenCodec")
            .field("validity", &self.validity)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        // Expiry is exact: a check at or after `exp` must fail.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            validity,
        }
    }

    /// Issue a signed token for `subject`, valid from now for the configured
    /// window. `exp` is strictly greater than `iat` (the validity is checked
    /// to be non-zero at config load).
    pub fn issue(&self, subject: &str) -> Result<String, SignError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp: iat + self.validity.as_secs() as i64,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
            .map_err(SignError)
    }

    /// Verify signature and expiry, returning the subject exactly as it was
    /// encoded at issuance. Verification never extends a token's life.
    pub fn verify(&self, token: &str) -> Result<String, VerifyError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => VerifyError::SignatureInvalid,
                ErrorKind::ExpiredSignature => VerifyError::Expired,
                _ => VerifyError::Malformed,
            })?;

        // The library treats `exp == now` as still alive; the contract here
        // is that the expiry instant itself is already expired.
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(VerifyError::Expired);
        }

        Ok(data.claims.sub)
    }
}
