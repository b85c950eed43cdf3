use anyhow::Result;
use chrono::{DateTime, Utc};
use models_bizdesk::target::{Target, TargetPeriod, TargetRecord, TargetStatus, TargetType};
use sqlx::PgPool;
use uuid::Uuid;

use crate::user_profile;

mod create;
mod delete;
mod get;
mod update;

pub use create::create_target;
pub use delete::delete_target;
pub use get::{fetch_record, get_target, list_targets};
pub use update::save_target;

pub(crate) const TARGET_COLUMNS: &str = "id, name, description, type, target_value, \
     current_value, unit, period, start_date, end_date, assigned_to, status, progress, \
     created_by, created_at, updated_at";

/// Options accepted by [list_targets]
#[derive(Debug, Default, Clone)]
pub struct TargetListFilter {
    pub status: Option<TargetStatus>,
    pub target_type: Option<TargetType>,
    pub period: Option<TargetPeriod>,
    /// cap the result set; used by the dashboard's active-target strip
    pub limit: Option<i64>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct TargetRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    #[sqlx(rename = "type")]
    target_type: String,
    target_value: f64,
    current_value: f64,
    unit: String,
    period: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    assigned_to: Vec<String>,
    status: String,
    progress: f64,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TargetRow> for TargetRecord {
    type Error = anyhow::Error;

    fn try_from(row: TargetRow) -> Result<Self> {
        Ok(TargetRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            target_type: row.target_type.parse::<TargetType>()?,
            target_value: row.target_value,
            current_value: row.current_value,
            unit: row.unit,
            period: row.period.parse::<TargetPeriod>()?,
            start_date: row.start_date,
            end_date: row.end_date,
            assigned_to_ids: row.assigned_to,
            status: row.status.parse::<TargetStatus>()?,
            progress: row.progress,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Resolves the assignee and creator references of a single record
pub async fn populate(pool: &PgPool, record: TargetRecord) -> Result<Target> {
    let mut populated = populate_many(pool, vec![record]).await?;
    Ok(populated.remove(0))
}

pub(crate) async fn populate_many(
    pool: &PgPool,
    records: Vec<TargetRecord>,
) -> Result<Vec<Target>> {
    let mut user_ids: Vec<String> = Vec::new();
    for record in &records {
        user_ids.extend(record.assigned_to_ids.iter().cloned());
        user_ids.extend(record.created_by.iter().cloned());
    }
    let refs = user_profile::get_refs(pool, &user_ids).await?;

    Ok(records
        .into_iter()
        .map(|record| {
            let assigned_to = record
                .assigned_to_ids
                .iter()
                .filter_map(|id| refs.get(id).cloned())
                .collect();
            let created_by = record
                .created_by
                .as_ref()
                .and_then(|id| refs.get(id).cloned());
            Target {
                id: record.id,
                name: record.name,
                description: record.description,
                target_type: record.target_type,
                target_value: record.target_value,
                current_value: record.current_value,
                unit: record.unit,
                period: record.period,
                start_date: record.start_date,
                end_date: record.end_date,
                assigned_to,
                status: record.status,
                progress: record.progress,
                created_by,
                created_at: record.created_at,
                updated_at: record.updated_at,
            }
        })
        .collect())
}
