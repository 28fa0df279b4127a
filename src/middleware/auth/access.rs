//! Bearer token verification → SecurityContext in request extensions.
//!
//! This layer populates context; it never rejects a request on its own. A
//! missing, malformed, tampered or expired token leaves the context empty
//! and the policy gate downstream decides whether that is acceptable. The
//! one exception is a user-store failure, which is an operational fault and
//! surfaces as 500 instead of masquerading as "unauthenticated".

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::SecurityContext;
use crate::error::AppError;
use crate::services::auth::Requirement;
use crate::state::AppState;

pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // from_fn cannot take a State extractor; pass the state explicitly.
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Public paths never depend on the token; skip straight through.
    if state.policy.requirement(req.method(), req.uri().path()) == Requirement::Public {
        return Ok(next.run(req).await);
    }

    let mut ctx = SecurityContext::default();

    if let Some(token) = bearer_token(req.headers()) {
        match state.tokens.verify(token) {
            Ok(subject) => {
                // A subject that no longer resolves (account deleted after
                // issuance) stays unauthenticated; no revocation list needed.
                if let Some(principal) = state.users.find_by_email(&subject).await? {
                    ctx.principal = Some(principal.into());
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "access token rejected");
            }
        }
    }

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
