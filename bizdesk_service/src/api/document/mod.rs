use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_document;
pub(in crate::api) mod delete_document;
pub(in crate::api) mod get_document;
pub(in crate::api) mod list_documents;
pub(in crate::api) mod update_document;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_documents::handler))
        .route("/", post(create_document::handler))
        .route("/:id", get(get_document::handler))
        .route("/:id", put(update_document::handler))
        .route("/:id", delete(delete_document::handler))
}
