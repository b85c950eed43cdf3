use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_target;
pub(in crate::api) mod delete_target;
pub(in crate::api) mod get_target;
pub(in crate::api) mod list_targets;
pub(in crate::api) mod update_target;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_targets::handler))
        .route("/", post(create_target::handler))
        .route("/:id", get(get_target::handler))
        .route("/:id", put(update_target::handler))
        .route("/:id", delete(delete_target::handler))
}
