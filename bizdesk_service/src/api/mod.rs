use anyhow::Context;
use axum::Router;
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::ApiContext;
use crate::config::Config;

pub mod client;
pub mod context;
pub mod dashboard;
pub mod document;
pub mod error;
pub mod finance;
pub mod health;
pub mod project;
pub mod swagger;
pub mod target;

pub async fn setup_and_serve(config: &Config, db: PgPool) -> anyhow::Result<()> {
    let port = config.port;
    let state = ApiContext {
        db,
        auth_token: config.api_auth_token.clone(),
    };
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();

    tracing::info!("bizdesk service is up and running on port {}", &port);

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

/// The full application: the token-gated API surface, the open health probe
/// and the generated docs. Shared with the integration tests.
pub fn app(state: ApiContext) -> Router {
    let cors = bizdesk_middleware::cors::cors_layer();

    api_router(state)
        .layer(cors.clone())
        .nest("/api/health", health::router().layer(cors))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
}

fn api_router(state: ApiContext) -> Router {
    entity_router()
        .layer(axum::middleware::from_fn_with_state(
            state.auth_token.clone(),
            bizdesk_middleware::auth::bearer_token::handler,
        ))
        .layer(axum::middleware::from_fn(
            bizdesk_middleware::connection_drop_prevention_handler,
        ))
        .with_state(state)
}

fn entity_router() -> Router<ApiContext> {
    Router::new()
        .nest("/api/clients", client::router())
        .nest("/api/projects", project::router())
        .nest("/api/finance", finance::router())
        .nest("/api/targets", target::router())
        .nest("/api/documents", document::router())
        .nest("/api/dashboard", dashboard::router())
}
