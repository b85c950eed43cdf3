use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::project::request::UpdateProjectRequest;
use models_bizdesk::project::response::ProjectMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Merge-replaces the stored project: absent fields stay untouched. The
/// task list is edited through its own routes, not here.
#[utoipa::path(
    put,
    operation_id = "update_project",
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "ID of the project")),
    request_body = UpdateProjectRequest,
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
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> Result<Json<ProjectMutatedResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let mut record = bizdesk_db_client::project::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    request.apply(&mut record);

    let saved = bizdesk_db_client::project::save_project(&ctx.db, &record)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    let project = bizdesk_db_client::project::populate_detail(&ctx.db, saved).await?;

    Ok(Json(ProjectMutatedResponse {
        message: "Project updated successfully".to_string(),
        project,
    }))
}
