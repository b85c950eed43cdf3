use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use models_bizdesk::document::{Document, DocumentCategory, DocumentRecord, RelatedTo};
use sqlx::PgPool;
use uuid::Uuid;

use crate::user_profile;

mod create;
mod delete;
mod get;
mod update;

pub use create::create_document;
pub use delete::delete_document;
pub use get::{fetch_record, get_document, list_documents};
pub use update::save_document;

pub(crate) const DOCUMENT_COLUMNS: &str = "id, name, description, file_url, file_type, \
     file_size, category, related_model, related_id, tags, is_public, uploaded_by, created_at, \
     updated_at";

/// Options accepted by [list_documents]
#[derive(Debug, Default, Clone)]
pub struct DocumentListFilter {
    pub category: Option<DocumentCategory>,
    /// case-insensitive substring match over name, description and tags
    pub search: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct DocumentRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    file_url: String,
    file_type: String,
    file_size: i64,
    category: String,
    related_model: Option<String>,
    related_id: Option<Uuid>,
    tags: Vec<String>,
    is_public: bool,
    uploaded_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for DocumentRecord {
    type Error = anyhow::Error;

    fn try_from(row: DocumentRow) -> Result<Self> {
        let related_to = match (row.related_model, row.related_id) {
            (Some(model), Some(id)) => Some(
                RelatedTo::from_parts(&model, id)
                    .ok_or_else(|| anyhow!("unrecognized related model {model}"))?,
            ),
            _ => None,
        };

        Ok(DocumentRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            file_url: row.file_url,
            file_type: row.file_type,
            file_size: row.file_size,
            category: row.category.parse::<DocumentCategory>()?,
            related_to,
            tags: row.tags,
            is_public: row.is_public,
            uploaded_by: row.uploaded_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Resolves the uploader reference of a single record
pub async fn populate(pool: &PgPool, record: DocumentRecord) -> Result<Document> {
    let uploaded_by = user_profile::get_ref(pool, Some(record.uploaded_by.as_str())).await?;
    Ok(Document::from_record(record, uploaded_by))
}

pub(crate) async fn populate_many(
    pool: &PgPool,
    records: Vec<DocumentRecord>,
) -> Result<Vec<Document>> {
    let uploader_ids: Vec<String> = records
        .iter()
        .map(|record| record.uploaded_by.clone())
        .collect();
    let refs = user_profile::get_refs(pool, &uploader_ids).await?;

    Ok(records
        .into_iter()
        .map(|record| {
            let uploaded_by = refs.get(&record.uploaded_by).cloned();
            Document::from_record(record, uploaded_by)
        })
        .collect())
}
