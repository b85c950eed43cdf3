use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::context::ApiContext;

pub(in crate::api) mod add_task;
pub(in crate::api) mod create_project;
pub(in crate::api) mod delete_project;
pub(in crate::api) mod delete_task;
pub(in crate::api) mod get_project;
pub(in crate::api) mod list_projects;
pub(in crate::api) mod update_project;
pub(in crate::api) mod update_task;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_projects::handler))
        .route("/", post(create_project::handler))
        .route("/:id", get(get_project::handler))
        .route("/:id", put(update_project::handler))
        .route("/:id", delete(delete_project::handler))
        .route("/:id/tasks", post(add_task::handler))
        .route("/:id/tasks/:task_id", put(update_task::handler))
        .route("/:id/tasks/:task_id", delete(delete_task::handler))
}
