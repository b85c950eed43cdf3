use anyhow::Result;
use models_bizdesk::target::{Target, TargetRecord};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{populate, populate_many, TargetListFilter, TargetRow, TARGET_COLUMNS};
use crate::push_condition;

fn list_query(filter: &TargetListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {TARGET_COLUMNS} FROM targets"));
    let mut first = true;

    if let Some(status) = filter.status {
        push_condition(&mut query, &mut first);
        query.push("status = ").push_bind(status.to_string());
    }
    if let Some(target_type) = filter.target_type {
        push_condition(&mut query, &mut first);
        query.push("type = ").push_bind(target_type.to_string());
    }
    if let Some(period) = filter.period {
        push_condition(&mut query, &mut first);
        query.push("period = ").push_bind(period.to_string());
    }

    query.push(" ORDER BY created_at DESC");
    if let Some(limit) = filter.limit {
        query.push(" LIMIT ").push_bind(limit);
    }
    query
}

/// Full filtered set, newest first, assignees and creators resolved
#[tracing::instrument(skip(pool))]
pub async fn list_targets(pool: &PgPool, filter: &TargetListFilter) -> Result<Vec<Target>> {
    let rows = list_query(filter)
        .build_query_as::<TargetRow>()
        .fetch_all(pool)
        .await?;
    let records = rows
        .into_iter()
        .map(TargetRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    populate_many(pool, records).await
}

/// The stored row without any reference resolution, for merge-style updates
pub async fn fetch_record(pool: &PgPool, id: Uuid) -> Result<Option<TargetRecord>> {
    let query = format!("SELECT {TARGET_COLUMNS} FROM targets WHERE id = $1");
    let row = sqlx::query_as::<_, TargetRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(TargetRecord::try_from).transpose()
}

#[tracing::instrument(skip(pool))]
pub async fn get_target(pool: &PgPool, id: Uuid) -> Result<Option<Target>> {
    match fetch_record(pool, id).await? {
        Some(record) => Ok(Some(populate(pool, record).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_bizdesk::target::{TargetPeriod, TargetStatus};

    #[test]
    fn dashboard_shape_caps_active_targets() {
        let query = list_query(&TargetListFilter {
            status: Some(TargetStatus::Active),
            limit: Some(5),
            ..Default::default()
        });
        let sql = query.sql();
        assert!(sql.contains("WHERE status = $1"));
        assert!(sql.ends_with("LIMIT $2"));
    }

    #[test]
    fn period_filter_is_bound() {
        let query = list_query(&TargetListFilter {
            period: Some(TargetPeriod::Monthly),
            ..Default::default()
        });
        assert!(query.sql().contains("WHERE period = $1"));
    }
}
