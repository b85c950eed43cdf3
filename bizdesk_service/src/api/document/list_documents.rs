use axum::extract::{Query, State};
use axum::Json;
use bizdesk_db_client::document::DocumentListFilter;
use models_bizdesk::document::response::ListDocumentsResponse;
use models_bizdesk::document::DocumentCategory;
use models_bizdesk::response::ErrorResponse;
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct Params {
    pub category: Option<DocumentCategory>,
    /// case-insensitive substring match over name, description and tags
    pub search: Option<String>,
}

/// Lists document metadata records, newest first, with uploaders resolved.
#[utoipa::path(
    get,
    operation_id = "list_documents",
    path = "/api/documents",
    params(Params),
    responses(
        (status = 200, body = ListDocumentsResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "documents"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Query(Params { category, search }): Query<Params>,
) -> Result<Json<ListDocumentsResponse>, ApiError> {
    let documents = bizdesk_db_client::document::list_documents(
        &ctx.db,
        &DocumentListFilter { category, search },
    )
    .await?;
    Ok(Json(ListDocumentsResponse { documents }))
}
