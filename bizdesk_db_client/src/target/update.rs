use anyhow::Result;
use models_bizdesk::target::TargetRecord;
use sqlx::PgPool;

use super::{TargetRow, TARGET_COLUMNS};

/// Writes a merged record back, replacing the whole row. Progress has been
/// re-derived by the merge before this point.
#[tracing::instrument(skip(pool, record))]
pub async fn save_target(pool: &PgPool, record: &TargetRecord) -> Result<Option<TargetRecord>> {
    let query = format!(
        "UPDATE targets SET name = $1, description = $2, type = $3, target_value = $4, \
         current_value = $5, unit = $6, period = $7, start_date = $8, end_date = $9, \
         assigned_to = $10, status = $11, progress = $12, updated_at = now() \
         WHERE id = $13 \
         RETURNING {TARGET_COLUMNS}"
    );

    let row = sqlx::query_as::<_, TargetRow>(&query)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.target_type.to_string())
        .bind(record.target_value)
        .bind(record.current_value)
        .bind(&record.unit)
        .bind(record.period.to_string())
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(&record.assigned_to_ids)
        .bind(record.status.to_string())
        .bind(record.progress)
        .bind(record.id)
        .fetch_optional(pool)
        .await?;

    row.map(TargetRecord::try_from).transpose()
}
