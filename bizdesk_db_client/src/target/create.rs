use anyhow::Result;
use models_bizdesk::target::request::CreateTargetRequest;
use models_bizdesk::target::TargetRecord;
use sqlx::PgPool;

use super::{TargetRow, TARGET_COLUMNS};

/// Persists a new target with its derived progress already computed
#[tracing::instrument(skip(pool, request))]
pub async fn create_target(
    pool: &PgPool,
    request: &CreateTargetRequest,
    created_by: Option<&str>,
) -> Result<TargetRecord> {
    let query = format!(
        "INSERT INTO targets (name, description, type, target_value, current_value, unit, \
         period, start_date, end_date, assigned_to, status, progress, created_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
         RETURNING {TARGET_COLUMNS}"
    );

    let row = sqlx::query_as::<_, TargetRow>(&query)
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.target_type.to_string())
        .bind(request.target_value)
        .bind(request.current_value)
        .bind(&request.unit)
        .bind(request.period.to_string())
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(&request.assigned_to)
        .bind(request.status.to_string())
        .bind(request.initial_progress())
        .bind(created_by)
        .fetch_one(pool)
        .await?;

    row.try_into()
}
