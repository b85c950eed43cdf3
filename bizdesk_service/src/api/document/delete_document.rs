use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::{ErrorResponse, MessageResponse};
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Removes the metadata record only; the externally hosted file is untouched.
#[utoipa::path(
    delete,
    operation_id = "delete_document",
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "ID of the document")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = bizdesk_db_client::document::delete_document(&ctx.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Document"));
    }
    Ok(Json(MessageResponse::new("Document deleted successfully")))
}
