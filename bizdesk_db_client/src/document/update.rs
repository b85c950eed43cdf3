use anyhow::Result;
use models_bizdesk::document::DocumentRecord;
use sqlx::PgPool;

use super::{DocumentRow, DOCUMENT_COLUMNS};

/// Writes a merged record back, replacing the whole row.
/// Returns None when the document disappeared between fetch and save.
#[tracing::instrument(skip(pool, record))]
pub async fn save_document(
    pool: &PgPool,
    record: &DocumentRecord,
) -> Result<Option<DocumentRecord>> {
    let query = format!(
        "UPDATE documents SET name = $1, description = $2, file_url = $3, file_type = $4, \
         file_size = $5, category = $6, related_model = $7, related_id = $8, tags = $9, \
         is_public = $10, updated_at = now() \
         WHERE id = $11 \
         RETURNING {DOCUMENT_COLUMNS}"
    );

    let row = sqlx::query_as::<_, DocumentRow>(&query)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.file_url)
        .bind(&record.file_type)
        .bind(record.file_size)
        .bind(record.category.to_string())
        .bind(record.related_to.map(|related| related.model()))
        .bind(record.related_to.map(|related| related.id()))
        .bind(&record.tags)
        .bind(record.is_public)
        .bind(record.id)
        .fetch_optional(pool)
        .await?;

    row.map(DocumentRecord::try_from).transpose()
}
