use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::project::response::GetProjectResponse;
use models_bizdesk::response::ErrorResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Returns one project with the full client record, resolved team members
/// and its task list with assignees.
#[utoipa::path(
    get,
    operation_id = "get_project",
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "ID of the project")),
    responses(
        (status = 200, body = GetProjectResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetProjectResponse>, ApiError> {
    let project = bizdesk_db_client::project::get_project(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    Ok(Json(GetProjectResponse { project }))
}
