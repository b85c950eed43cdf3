use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_transaction;
pub(in crate::api) mod delete_transaction;
pub(in crate::api) mod get_transaction;
pub(in crate::api) mod list_transactions;
pub(in crate::api) mod summary_stats;
pub(in crate::api) mod update_transaction;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_transactions::handler))
        .route("/", post(create_transaction::handler))
        .route("/summary/stats", get(summary_stats::handler))
        .route("/:id", get(get_transaction::handler))
        .route("/:id", put(update_transaction::handler))
        .route("/:id", delete(delete_transaction::handler))
}
