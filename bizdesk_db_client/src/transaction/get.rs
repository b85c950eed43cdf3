use anyhow::Result;
use models_bizdesk::transaction::{Transaction, TransactionDetail, TransactionRecord};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{
    populate_detail, populate_many, TransactionListFilter, TransactionRow, TRANSACTION_COLUMNS,
};
use crate::push_condition;

fn list_query(filter: &TransactionListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {TRANSACTION_COLUMNS} FROM transactions"));
    let mut first = true;

    if let Some(transaction_type) = filter.transaction_type {
        push_condition(&mut query, &mut first);
        query.push("type = ").push_bind(transaction_type.to_string());
    }
    if let Some(client) = filter.client {
        push_condition(&mut query, &mut first);
        query.push("client_id = ").push_bind(client);
    }
    if let Some(project) = filter.project {
        push_condition(&mut query, &mut first);
        query.push("project_id = ").push_bind(project);
    }
    if let Some(start_date) = filter.start_date {
        push_condition(&mut query, &mut first);
        query.push("date >= ").push_bind(start_date);
    }
    if let Some(end_date) = filter.end_date {
        push_condition(&mut query, &mut first);
        query.push("date <= ").push_bind(end_date);
    }

    query.push(" ORDER BY date DESC");
    query
}

/// Full filtered set, newest transaction date first, references resolved
#[tracing::instrument(skip(pool))]
pub async fn list_transactions(
    pool: &PgPool,
    filter: &TransactionListFilter,
) -> Result<Vec<Transaction>> {
    let rows = list_query(filter)
        .build_query_as::<TransactionRow>()
        .fetch_all(pool)
        .await?;
    let records = rows
        .into_iter()
        .map(TransactionRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    populate_many(pool, records).await
}

/// The most recent transactions regardless of status, for the dashboard
#[tracing::instrument(skip(pool))]
pub async fn recent_transactions(pool: &PgPool, limit: i64) -> Result<Vec<Transaction>> {
    let mut query = list_query(&TransactionListFilter::default());
    query.push(" LIMIT ").push_bind(limit);

    let rows = query
        .build_query_as::<TransactionRow>()
        .fetch_all(pool)
        .await?;
    let records = rows
        .into_iter()
        .map(TransactionRecord::try_from)
        .collect::<Result<Vec<_>>>()?;
    populate_many(pool, records).await
}

/// The stored row without any reference resolution, for merge-style updates
pub async fn fetch_record(pool: &PgPool, id: Uuid) -> Result<Option<TransactionRecord>> {
    let query = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = $1");
    let row = sqlx::query_as::<_, TransactionRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(TransactionRecord::try_from).transpose()
}

#[tracing::instrument(skip(pool))]
pub async fn get_transaction(pool: &PgPool, id: Uuid) -> Result<Option<TransactionDetail>> {
    match fetch_record(pool, id).await? {
        Some(record) => Ok(Some(populate_detail(pool, record).await?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use models_bizdesk::transaction::TransactionType;

    #[test]
    fn orders_by_transaction_date() {
        let query = list_query(&TransactionListFilter::default());
        assert!(query.sql().ends_with("ORDER BY date DESC"));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let query = list_query(&TransactionListFilter {
            transaction_type: Some(TransactionType::Income),
            start_date: Some(Utc::now()),
            end_date: Some(Utc::now()),
            ..Default::default()
        });
        let sql = query.sql();
        assert!(sql.contains("WHERE type = $1"));
        assert!(sql.contains("AND date >= $2"));
        assert!(sql.contains("AND date <= $3"));
    }
}
