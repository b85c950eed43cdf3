use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::document::request::UpdateDocumentRequest;
use models_bizdesk::document::response::DocumentMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Merge-replaces the stored document metadata: absent fields stay untouched.
#[utoipa::path(
    put,
    operation_id = "update_document",
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "ID of the document")),
    request_body = UpdateDocumentRequest,
    responses(
        (status = 200, body = DocumentMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx, payload))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateDocumentRequest>, JsonRejection>,
) -> Result<Json<DocumentMutatedResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let mut record = bizdesk_db_client::document::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Document"))?;
    request.apply(&mut record);

    let saved = bizdesk_db_client::document::save_document(&ctx.db, &record)
        .await?
        .ok_or(ApiError::NotFound("Document"))?;
    let document = bizdesk_db_client::document::populate(&ctx.db, saved).await?;

    Ok(Json(DocumentMutatedResponse {
        message: "Document updated successfully".to_string(),
        document,
    }))
}
