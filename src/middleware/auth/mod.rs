/*!
 * Request authentication filters.
 *
 * - access: bearer token verification, SecurityContext population
 * - gate: access policy enforcement (401 for protected paths without a
 *   principal)
 *
 * Applied in that order: access runs first and only populates; the gate
 * decides. Neither holds any mutable state of its own.
 */
pub mod access;
pub mod gate;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
        routing::{get, post},
    };
    use chrono::Utc;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use sqlx::PgPool;
    use tower::ServiceExt;

    use crate::api::extractors::CurrentPrincipal;
    use crate::api::handlers::auth::login;
    use crate::api::handlers::clientes::{delete_cliente, get_cliente};
    use crate::services::auth::store::testing::{FailingUserStore, InMemoryUserStore};
    use crate::services::auth::token_codec::Claims;
    use crate::services::auth::{Authenticator, Role, StoredPrincipal, TokenCodec, UserStore, password};
    use crate::state::AppState;

    const SECRET: &[u8] = b"test-secret-0123456789";

    async fn seeded_store() -> InMemoryUserStore {
        let senha_hash = password::hash_password("pw1", Some(4)).await.unwrap();
        InMemoryUserStore::with(vec![StoredPrincipal {
            id: 5,
            email: "a@b.com".to_string(),
            senha_hash,
            roles: vec![Role::Customer],
        }])
    }

    fn state_with(users: Arc<dyn UserStore>) -> AppState {
        let tokens = Arc::new(TokenCodec::new(SECRET, Duration::from_secs(600)));
        AppState {
            // Lazy handle: no test in this module ever reaches the database.
            db: PgPool::connect_lazy("postgres://postgres@localhost/loja").unwrap(),
            users: users.clone(),
            auth: Arc::new(Authenticator::new(users, tokens.clone())),
            tokens,
            policy: Arc::new(crate::app::access_policy()),
        }
    }

    /// Route table mirroring the app's shape. Data-access handlers are
    /// stubbed so the auth chain is what gets exercised; the clientes
    /// handlers are real because their role checks run before any query.
    fn router(state: AppState) -> Router {
        async fn created() -> StatusCode {
            StatusCode::CREATED
        }
        async fn produto() -> &'static str {
            "produto"
        }
        async fn whoami(CurrentPrincipal(principal): CurrentPrincipal) -> String {
            principal.email
        }

        let routes = Router::new()
            .route("/login", post(login))
            .route("/produtos", post(created))
            .route("/produtos/{produto_id}", get(produto))
            .route(
                "/clientes/{cliente_id}",
                get(get_cliente).delete(delete_cliente),
            )
            .route("/pedidos/{pedido_id}", get(whoami));

        let routes = super::gate::apply(routes, state.clone());
        let routes = super::access::apply(routes, state.clone());
        routes.with_state(state)
    }

    async fn seeded_router() -> (Router, AppState) {
        let state = state_with(Arc::new(seeded_store().await));
        (router(state.clone()), state)
    }

    fn request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn login_request(email: &str, senha: &str) -> Request<Body> {
        let body = serde_json::json!({ "email": email, "senha": senha });
        Request::builder()
            .method(Method::POST)
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn expired_token() -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "a@b.com".to_string(),
            iat: now - 120,
            exp: now - 60,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn login_returns_the_token_in_the_authorization_header() {
        let (router, state) = seeded_router().await;

        let response = router.oneshot(login_request("a@b.com", "pw1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .expect("Authorization header missing");
        let token = header.strip_prefix("Bearer ").expect("Bearer scheme");
        assert_eq!(state.tokens.verify(token).unwrap(), "a@b.com");
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let (router, _) = seeded_router().await;

        let wrong_senha = router
            .clone()
            .oneshot(login_request("a@b.com", "wrong"))
            .await
            .unwrap();
        let unknown_email = router
            .oneshot(login_request("nobody@b.com", "pw1"))
            .await
            .unwrap();

        assert_eq!(wrong_senha.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
        // Byte-identical bodies: nothing reveals whether the email exists.
        assert_eq!(
            body_bytes(wrong_senha).await,
            body_bytes(unknown_email).await
        );
    }

    #[tokio::test]
    async fn public_get_does_not_depend_on_the_token() {
        let (router, _) = seeded_router().await;

        let expired = expired_token();
        for token in [None, Some("garbage"), Some(expired.as_str())] {
            let response = router
                .clone()
                .oneshot(request(Method::GET, "/produtos/7", token))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn protected_post_without_token_is_401() {
        let (router, _) = seeded_router().await;
        let response = router
            .oneshot(request(Method::POST, "/produtos", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn protected_post_with_valid_token_proceeds() {
        let (router, state) = seeded_router().await;
        let token = state.tokens.issue("a@b.com").unwrap();
        let response = router
            .oneshot(request(Method::POST, "/produtos", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn expired_token_is_401_not_403() {
        let (router, _) = seeded_router().await;
        let response = router
            .oneshot(request(Method::GET, "/clientes/5", Some(&expired_token())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn tampered_token_is_401() {
        let (router, state) = seeded_router().await;
        let mut token = state.tokens.issue("a@b.com").unwrap();
        token.pop();
        token.push('x');

        let response = router
            .oneshot(request(Method::GET, "/pedidos/1", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_installs_the_principal() {
        let (router, state) = seeded_router().await;
        let token = state.tokens.issue("a@b.com").unwrap();

        let response = router
            .oneshot(request(Method::GET, "/pedidos/9", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"a@b.com");
    }

    #[tokio::test]
    async fn stale_token_for_a_deleted_account_is_401() {
        let (router, state) = seeded_router().await;
        // Valid signature, but the subject no longer exists in the store.
        let token = state.tokens.issue("ghost@b.com").unwrap();

        let response = router
            .oneshot(request(Method::GET, "/pedidos/1", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unlisted_path_defaults_to_authenticated() {
        let (router, _) = seeded_router().await;
        let response = router
            .oneshot(request(Method::GET, "/pedidos/1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn customer_reading_another_cliente_is_403() {
        let (router, state) = seeded_router().await;
        let token = state.tokens.issue("a@b.com").unwrap();

        let response = router
            .oneshot(request(Method::GET, "/clientes/7", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn customer_deleting_a_cliente_is_403() {
        let (router, state) = seeded_router().await;
        let token = state.tokens.issue("a@b.com").unwrap();

        let response = router
            .oneshot(request(Method::DELETE, "/clientes/5", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_500_not_401() {
        let state = state_with(Arc::new(FailingUserStore));
        let token = state.tokens.issue("a@b.com").unwrap();
        let router = router(state);

        let response = router
            .oneshot(request(Method::GET, "/pedidos/1", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
