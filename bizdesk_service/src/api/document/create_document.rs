use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use models_bizdesk::document::request::CreateDocumentRequest;
use models_bizdesk::document::response::DocumentMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::user::UserContext;
use models_bizdesk::ValidationError;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Records document metadata. The file itself is hosted externally; no bytes
/// pass through this service. The uploader reference is required.
#[utoipa::path(
    post,
    operation_id = "create_document",
    path = "/api/documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, body = DocumentMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = ?user_context.user_id))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DocumentMutatedResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let uploaded_by = user_context
        .actor()
        .ok_or_else(|| ValidationError::required("uploadedBy"))?;

    let record =
        bizdesk_db_client::document::create_document(&ctx.db, &request, &uploaded_by).await?;
    let document = bizdesk_db_client::document::populate(&ctx.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(DocumentMutatedResponse {
            message: "Document uploaded successfully".to_string(),
            document,
        }),
    ))
}
