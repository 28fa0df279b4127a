//! Endpoint access gate.
//!
//! Consults the AccessPolicy for the request's method and path. Public
//! requests proceed regardless of context; everything else requires the
//! access layer above to have installed an authenticated principal,
//! otherwise the request ends here with 401. Role checks stay with the
//! handlers (403 is theirs to raise).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::SecurityContext;
use crate::error::AppError;
use crate::services::auth::Requirement;
use crate::state::AppState;

pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, gate_middleware))
}

async fn gate_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    match state.policy.requirement(req.method(), req.uri().path()) {
        Requirement::Public => Ok(next.run(req).await),
        Requirement::Authenticated => {
            let authenticated = req
                .extensions()
                .get::<SecurityContext>()
                .is_some_and(|ctx| ctx.principal.is_some());

            if !authenticated {
                return Err(AppError::Unauthorized);
            }

            Ok(next.run(req).await)
        }
    }
}
