use std::collections::HashMap;

use anyhow::Result;
use models_bizdesk::client::{Client, ClientRecord, ClientSummary};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{populate, populate_many, ClientListFilter, ClientRow, CLIENT_COLUMNS};
use crate::push_condition;

fn list_query(filter: &ClientListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {CLIENT_COLUMNS} FROM clients"));
    let mut first = true;

    if let Some(status) = filter.status {
        push_condition(&mut query, &mut first);
        query.push("status = ").push_bind(status.to_string());
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        push_condition(&mut query, &mut first);
        query
            .push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR company ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    query.push(" ORDER BY created_at DESC");
    query
}

/// Full filtered set, newest first, creators resolved
#[tracing::instrument(skip(pool))]
pub async fn list_clients(pool: &PgPool, filter: &ClientListFilter) -> Result<Vec<Client>> {
    let rows = list_query(filter)
        .build_query_as::<ClientRow>()
        .fetch_all(pool)
        .await?;
    let records = rows
        .into_iter()
        .map(ClientRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    populate_many(pool, records).await
}

/// The stored row without any reference resolution, for merge-style updates
pub async fn fetch_record(pool: &PgPool, id: Uuid) -> Result<Option<ClientRecord>> {
    let query = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1");
    let row = sqlx::query_as::<_, ClientRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(ClientRecord::try_from).transpose()
}

#[tracing::instrument(skip(pool))]
pub async fn get_client(pool: &PgPool, id: Uuid) -> Result<Option<Client>> {
    match fetch_record(pool, id).await? {
        Some(record) => Ok(Some(populate(pool, record).await?)),
        None => Ok(None),
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ClientSummaryRow {
    id: Uuid,
    name: String,
    company: Option<String>,
}

/// Batch-resolves client ids to the projection other entities embed.
/// Dangling ids resolve to nothing, mirroring an unresolved reference.
pub async fn get_summaries(pool: &PgPool, ids: &[Uuid]) -> Result<HashMap<Uuid, ClientSummary>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, ClientSummaryRow>(
        "SELECT id, name, company FROM clients WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            (
                row.id,
                ClientSummary {
                    id: row.id,
                    name: row.name,
                    company: row.company,
                },
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_bizdesk::client::ClientStatus;

    #[test]
    fn unfiltered_list_has_no_where_clause() {
        let query = list_query(&ClientListFilter::default());
        assert_eq!(
            query.sql(),
            format!("SELECT {CLIENT_COLUMNS} FROM clients ORDER BY created_at DESC")
        );
    }

    #[test]
    fn filters_compose_with_and() {
        let query = list_query(&ClientListFilter {
            status: Some(ClientStatus::Pending),
            search: Some("acme".to_string()),
        });
        let sql = query.sql();
        assert!(sql.contains("WHERE status = $1"));
        assert!(sql.contains("AND (name ILIKE $2 OR company ILIKE $3 OR email ILIKE $4)"));
        assert!(sql.ends_with("ORDER BY created_at DESC"));
    }
}
