use anyhow::Result;
use models_bizdesk::project::ProjectRecord;
use sqlx::PgPool;

use super::{ProjectRow, PROJECT_COLUMNS};

/// Writes a merged record back, replacing the whole row.
/// Returns None when the project disappeared between fetch and save.
#[tracing::instrument(skip(pool, record))]
pub async fn save_project(pool: &PgPool, record: &ProjectRecord) -> Result<Option<ProjectRecord>> {
    let query = format!(
        "UPDATE projects SET name = $1, description = $2, client_id = $3, status = $4, \
         budget = $5, spent = $6, start_date = $7, end_date = $8, priority = $9, \
         team_members = $10, progress = $11, updated_at = now() \
         WHERE id = $12 \
         RETURNING {PROJECT_COLUMNS}"
    );

    let row = sqlx::query_as::<_, ProjectRow>(&query)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.client_id)
        .bind(record.status.to_string())
        .bind(record.budget)
        .bind(record.spent)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.priority.to_string())
        .bind(&record.team_member_ids)
        .bind(record.progress)
        .bind(record.id)
        .fetch_optional(pool)
        .await?;

    row.map(ProjectRecord::try_from).transpose()
}
