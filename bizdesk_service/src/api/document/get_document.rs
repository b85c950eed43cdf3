use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::document::response::GetDocumentResponse;
use models_bizdesk::response::ErrorResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[utoipa::path(
    get,
    operation_id = "get_document",
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "ID of the document")),
    responses(
        (status = 200, body = GetDocumentResponse),
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
) -> Result<Json<GetDocumentResponse>, ApiError> {
    let document = bizdesk_db_client::document::get_document(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Document"))?;
    Ok(Json(GetDocumentResponse { document }))
}
