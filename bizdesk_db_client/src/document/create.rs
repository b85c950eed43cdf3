use anyhow::Result;
use models_bizdesk::document::request::CreateDocumentRequest;
use models_bizdesk::document::DocumentRecord;
use sqlx::PgPool;

use super::{DocumentRow, DOCUMENT_COLUMNS};

/// Persists a document metadata record; the uploader is required, so callers
/// reject unidentified actors before reaching this point
#[tracing::instrument(skip(pool, request))]
pub async fn create_document(
    pool: &PgPool,
    request: &CreateDocumentRequest,
    uploaded_by: &str,
) -> Result<DocumentRecord> {
    let query = format!(
        "INSERT INTO documents (name, description, file_url, file_type, file_size, category, \
         related_model, related_id, tags, is_public, uploaded_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
         RETURNING {DOCUMENT_COLUMNS}"
    );

    let row = sqlx::query_as::<_, DocumentRow>(&query)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.file_url)
        .bind(&request.file_type)
        .bind(request.file_size)
        .bind(request.category.to_string())
        .bind(request.related_to.map(|related| related.model()))
        .bind(request.related_to.map(|related| related.id()))
        .bind(&request.tags)
        .bind(request.is_public)
        .bind(uploaded_by)
        .fetch_one(pool)
        .await?;

    row.try_into()
}
