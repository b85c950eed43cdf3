use anyhow::Result;
use models_bizdesk::document::{Document, DocumentRecord};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{populate, populate_many, DocumentListFilter, DocumentRow, DOCUMENT_COLUMNS};
use crate::push_condition;

fn list_query(filter: &DocumentListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {DOCUMENT_COLUMNS} FROM documents"));
    let mut first = true;

    if let Some(category) = filter.category {
        push_condition(&mut query, &mut first);
        query.push("category = ").push_bind(category.to_string());
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        push_condition(&mut query, &mut first);
        query
            .push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE ")
            .push_bind(pattern)
            .push("))");
    }

    query.push(" ORDER BY created_at DESC");
    query
}

/// Full filtered set, newest first, uploaders resolved
#[tracing::instrument(skip(pool))]
pub async fn list_documents(pool: &PgPool, filter: &DocumentListFilter) -> Result<Vec<Document>> {
    let rows = list_query(filter)
        .build_query_as::<DocumentRow>()
        .fetch_all(pool)
        .await?;
    let records = rows
        .into_iter()
        .map(DocumentRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    populate_many(pool, records).await
}

/// The stored row without any reference resolution, for merge-style updates
pub async fn fetch_record(pool: &PgPool, id: Uuid) -> Result<Option<DocumentRecord>> {
    let query = format!("SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1");
    let row = sqlx::query_as::<_, DocumentRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(DocumentRecord::try_from).transpose()
}

#[tracing::instrument(skip(pool))]
pub async fn get_document(pool: &PgPool, id: Uuid) -> Result<Option<Document>> {
    match fetch_record(pool, id).await? {
        Some(record) => Ok(Some(populate(pool, record).await?)),
        None => Ok(None),
    }
}
