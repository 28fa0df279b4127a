use axum::{
    Json,
    extract::State,
    http::{HeaderName, StatusCode, header},
};

use crate::api::dto::auth::LoginRequest;
use crate::error::AppError;
use crate::services::auth::Credentials;
use crate::state::AppState;

/// `POST /login` — verify credentials and return the issued token in the
/// `Authorization` response header. No body, no cookie, no server-side
/// session. The 401 for unknown email and for wrong senha is identical.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1]), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let token = state
        .auth
        .authenticate(&Credentials {
            email: req.email,
            senha: req.senha,
        })
        .await?;

    Ok((
        StatusCode::OK,
        [(header::AUTHORIZATION, format!("Bearer {token}"))],
    ))
}
