use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models_bizdesk::project::request::CreateTaskRequest;
use models_bizdesk::project::response::ProjectMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Appends a task to the project's list and returns the refreshed parent.
#[utoipa::path(
    post,
    operation_id = "add_task",
    path = "/api/projects/{id}/tasks",
    params(("id" = Uuid, Path, description = "ID of the parent project")),
    request_body = CreateTaskRequest,
    responses(
        (status = 201, body = ProjectMutatedResponse),
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
    Path(id): Path<Uuid>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectMutatedResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let record = bizdesk_db_client::project::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    bizdesk_db_client::project::task::add_task(&ctx.db, record.id, &request).await?;
    let project = bizdesk_db_client::project::populate_detail(&ctx.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectMutatedResponse {
            message: "Task added successfully".to_string(),
            project,
        }),
    ))
}
