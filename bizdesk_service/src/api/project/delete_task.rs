use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::{ErrorResponse, MessageResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct Params {
    pub id: Uuid,
    pub task_id: Uuid,
}

/// Removes one task from the project's list by its scoped identity.
#[utoipa::path(
    delete,
    operation_id = "delete_task",
    path = "/api/projects/{id}/tasks/{task_id}",
    params(
        ("id" = Uuid, Path, description = "ID of the parent project"),
        ("task_id" = Uuid, Path, description = "ID of the task within the project"),
    ),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(Params { id, task_id }): Path<Params>,
) -> Result<Json<MessageResponse>, ApiError> {
    bizdesk_db_client::project::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    let deleted = bizdesk_db_client::project::task::delete_task(&ctx.db, id, task_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Task"));
    }
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
