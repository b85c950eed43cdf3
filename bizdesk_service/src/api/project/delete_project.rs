use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::{ErrorResponse, MessageResponse};
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Removes the project and its task list; nothing else cascades.
#[utoipa::path(
    delete,
    operation_id = "delete_project",
    path = "/api/projects/{id}",
    params(("id" = Uuid, Path, description = "ID of the project")),
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
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = bizdesk_db_client::project::delete_project(&ctx.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Project"));
    }
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
