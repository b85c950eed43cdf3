use axum_test::TestServer;
use bizdesk_middleware::auth::bearer_token::ApiAuthToken;
use bizdesk_service::api::{app, context::ApiContext};
use sqlx::PgPool;

use crate::common::TEST_TOKEN;

mod test_crud;
mod test_dashboard;

/// The full app over a real pool, for end-to-end flows
pub fn server_with_pool(pool: PgPool) -> TestServer {
    let state = ApiContext {
        db: pool,
        auth_token: ApiAuthToken::new(TEST_TOKEN),
    };
    TestServer::new(app(state)).unwrap()
}
