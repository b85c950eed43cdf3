use std::collections::HashMap;

use anyhow::Result;
use models_bizdesk::project::{Project, ProjectDetail, ProjectRecord, ProjectSummary};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{populate_detail, populate_many, ProjectListFilter, ProjectRow, PROJECT_COLUMNS};
use crate::push_condition;

fn list_query(filter: &ProjectListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {PROJECT_COLUMNS} FROM projects"));
    let mut first = true;

    if let Some(status) = filter.status {
        push_condition(&mut query, &mut first);
        query.push("status = ").push_bind(status.to_string());
    }
    if let Some(client) = filter.client {
        push_condition(&mut query, &mut first);
        query.push("client_id = ").push_bind(client);
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        push_condition(&mut query, &mut first);
        query
            .push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    query.push(" ORDER BY created_at DESC");
    query
}

/// Full filtered set, newest first, references resolved to projections and
/// each project's task list attached
#[tracing::instrument(skip(pool))]
pub async fn list_projects(pool: &PgPool, filter: &ProjectListFilter) -> Result<Vec<Project>> {
    let rows = list_query(filter)
        .build_query_as::<ProjectRow>()
        .fetch_all(pool)
        .await?;
    let records = rows
        .into_iter()
        .map(ProjectRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    populate_many(pool, records).await
}

/// The stored row without any reference resolution, for merge-style updates
pub async fn fetch_record(pool: &PgPool, id: Uuid) -> Result<Option<ProjectRecord>> {
    let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
    let row = sqlx::query_as::<_, ProjectRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(ProjectRecord::try_from).transpose()
}

#[tracing::instrument(skip(pool))]
pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<Option<ProjectDetail>> {
    match fetch_record(pool, id).await? {
        Some(record) => Ok(Some(populate_detail(pool, record).await?)),
        None => Ok(None),
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProjectSummaryRow {
    id: Uuid,
    name: String,
}

/// Batch-resolves project ids to the projection other entities embed
pub async fn get_summaries(pool: &PgPool, ids: &[Uuid]) -> Result<HashMap<Uuid, ProjectSummary>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows =
        sqlx::query_as::<_, ProjectSummaryRow>("SELECT id, name FROM projects WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.id, ProjectSummary {
            id: row.id,
            name: row.name,
        }))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_bizdesk::project::ProjectStatus;

    #[test]
    fn client_filter_binds_the_reference() {
        let query = list_query(&ProjectListFilter {
            status: Some(ProjectStatus::Active),
            client: Some(Uuid::nil()),
            search: None,
        });
        let sql = query.sql();
        assert!(sql.contains("WHERE status = $1"));
        assert!(sql.contains("AND client_id = $2"));
    }

    #[test]
    fn search_spans_name_and_description() {
        let query = list_query(&ProjectListFilter {
            search: Some("redesign".to_string()),
            ..Default::default()
        });
        assert!(query
            .sql()
            .contains("WHERE (name ILIKE $1 OR description ILIKE $2)"));
    }
}
