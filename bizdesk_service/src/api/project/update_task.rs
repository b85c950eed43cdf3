use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::project::request::UpdateTaskRequest;
use models_bizdesk::project::response::ProjectMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct Params {
    pub id: Uuid,
    pub task_id: Uuid,
}

/// Merges fields into one task, addressed by its identity scoped to the
/// parent project, and returns the refreshed parent.
#[utoipa::path(
    put,
    operation_id = "update_task",
    path = "/api/projects/{id}/tasks/{task_id}",
    params(
        ("id" = Uuid, Path, description = "ID of the parent project"),
        ("task_id" = Uuid, Path, description = "ID of the task within the project"),
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, body = ProjectMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, payload))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(Params { id, task_id }): Path<Params>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<ProjectMutatedResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let project_record = bizdesk_db_client::project::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    let mut task = bizdesk_db_client::project::task::fetch_record(&ctx.db, id, task_id)
        .await?
        .ok_or(ApiError::NotFound("Task"))?;
    request.apply(&mut task);

    bizdesk_db_client::project::task::save_task(&ctx.db, id, &task)
        .await?
        .ok_or(ApiError::NotFound("Task"))?;

    let project = bizdesk_db_client::project::populate_detail(&ctx.db, project_record).await?;

    Ok(Json(ProjectMutatedResponse {
        message: "Task updated successfully".to_string(),
        project,
    }))
}
