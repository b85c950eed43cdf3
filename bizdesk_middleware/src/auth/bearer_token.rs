use anyhow::Context;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use models_bizdesk::{response::ErrorResponse, user::UserContext};

/// The header the upstream proxy forwards the acting user's id in.
/// Token validity is the gate; identity is taken on trust from this header.
static ACTOR_ID_HEADER: &str = "x-bizdesk-user-id";

/// The shared secret every API caller must present as a bearer token
#[derive(Clone)]
pub struct ApiAuthToken(String);

impl ApiAuthToken {
    /// Read the token from the `API_AUTH_TOKEN` environment variable
    pub fn from_env() -> anyhow::Result<Self> {
        let token = std::env::var("API_AUTH_TOKEN").context("API_AUTH_TOKEN must be provided")?;
        Ok(ApiAuthToken(token))
    }

    pub fn new(token: impl Into<String>) -> Self {
        ApiAuthToken(token.into())
    }

    fn matches(&self, presented: &str) -> bool {
        self.0 == presented
    }
}

impl std::fmt::Debug for ApiAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never log the secret itself
        f.write_str("ApiAuthToken(***)")
    }
}

/// Sentinel value which represents that we were able to validate the bearer token on the request
#[derive(Debug)]
pub struct ValidBearerToken(());

#[async_trait]
impl<S> FromRequestParts<S> for ValidBearerToken
where
    ApiAuthToken: FromRef<S>,
    S: Send + Sync + 'static,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let unauthorized = || {
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("unauthorized")),
            )
        };

        let Some(token) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
        else {
            tracing::trace!("missing or malformed authorization header");
            return Err(unauthorized());
        };

        let expected = ApiAuthToken::from_ref(state);
        expected
            .matches(token)
            .then_some(ValidBearerToken(()))
            .ok_or_else(unauthorized)
    }
}

/// Validates the bearer token and attaches the forwarded actor id as the
/// request's [UserContext]
pub async fn handler(_valid_token: ValidBearerToken, mut req: Request, next: Next) -> Response {
    let user_id = req
        .headers()
        .get(ACTOR_ID_HEADER)
        .and_then(|header| header.to_str().ok())
        .unwrap_or_default()
        .to_string();

    tracing::trace!(user_id = %user_id, "attaching user context");
    req.extensions_mut().insert(UserContext { user_id });

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Extension, Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn whoami(user_context: Extension<UserContext>) -> String {
        user_context.user_id.clone()
    }

    fn test_router() -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn_with_state(
                ApiAuthToken::new("secret-token"),
                handler,
            ))
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let response = test_router()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "unauthorized");
    }

    #[tokio::test]
    async fn wrong_token_is_unauthorized() {
        let response = test_router()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("authorization", "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_attaches_forwarded_actor() {
        let response = test_router()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("authorization", "Bearer secret-token")
                    .header("x-bizdesk-user-id", "user-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"user-42");
    }

    #[tokio::test]
    async fn valid_token_without_actor_header_yields_empty_context() {
        let response = test_router()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("authorization", "Bearer secret-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
