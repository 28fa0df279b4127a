use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::{Principal, SecurityContext};

/// Extractor for handlers that require an authenticated principal.
/// The policy gate rejects unauthenticated requests to protected routes
/// before a handler runs, so an empty context here also maps to 401.
pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .and_then(|ctx| ctx.principal.clone())
            .map(CurrentPrincipal)
            .ok_or(AppError::Unauthorized)
    }
}
