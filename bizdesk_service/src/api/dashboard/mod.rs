use axum::{routing::get, Router};

use crate::api::context::ApiContext;

pub(in crate::api) mod stats;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/stats", get(stats::handler))
}
