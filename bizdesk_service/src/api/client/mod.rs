use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_client;
pub(in crate::api) mod delete_client;
pub(in crate::api) mod get_client;
pub(in crate::api) mod list_clients;
pub(in crate::api) mod update_client;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_clients::handler))
        .route("/", post(create_client::handler))
        .route("/:id", get(get_client::handler))
        .route("/:id", put(update_client::handler))
        .route("/:id", delete(delete_client::handler))
}
