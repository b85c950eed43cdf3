use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::{ErrorResponse, MessageResponse};
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[utoipa::path(
    delete,
    operation_id = "delete_target",
    path = "/api/targets/{id}",
    params(("id" = Uuid, Path, description = "ID of the target")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "targets"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = bizdesk_db_client::target::delete_target(&ctx.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Target"));
    }
    Ok(Json(MessageResponse::new("Target deleted successfully")))
}
