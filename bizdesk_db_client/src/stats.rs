//! Read-only aggregation queries behind the dashboard and the finance
//! summary. Everything here is recomputed in full on each call; entity
//! volumes are small enough that incremental maintenance is not worth its
//! complexity.

use anyhow::Result;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use models_bizdesk::client::ClientStatus;
use models_bizdesk::dashboard::MonthlyTrendPoint;
use models_bizdesk::project::ProjectStatus;
use models_bizdesk::transaction::response::CategoryTotal;
use models_bizdesk::transaction::TransactionType;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::push_condition;

/// Midnight on the first day of the month `now` falls in
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .unwrap()
}

/// Midnight on January 1st of the year `now` falls in
pub fn start_of_year(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0).unwrap()
}

/// Midnight on the first day of the month `months` before the current one
pub fn months_back(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let total = now.year() * 12 + now.month0() as i32 - months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
}

fn completed_window_query(
    select: &str,
    transaction_type: TransactionType,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {select} FROM transactions"));
    let mut first = true;

    push_condition(&mut query, &mut first);
    query.push("type = ").push_bind(transaction_type.to_string());
    push_condition(&mut query, &mut first);
    query.push("status = 'completed'");
    if let Some(from) = from {
        push_condition(&mut query, &mut first);
        query.push("date >= ").push_bind(from);
    }
    if let Some(to) = to {
        push_condition(&mut query, &mut first);
        query.push("date <= ").push_bind(to);
    }
    query
}

/// Sum of completed transactions of one type inside an optional date window
#[tracing::instrument(skip(pool))]
pub async fn completed_total(
    pool: &PgPool,
    transaction_type: TransactionType,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<f64> {
    let total = completed_window_query("COALESCE(SUM(amount), 0)", transaction_type, from, to)
        .build_query_scalar::<f64>()
        .fetch_one(pool)
        .await?;
    Ok(total)
}

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    category: String,
    total: f64,
}

/// Per-category completed totals, largest first
#[tracing::instrument(skip(pool))]
pub async fn category_totals(
    pool: &PgPool,
    transaction_type: TransactionType,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<Vec<CategoryTotal>> {
    let mut query = completed_window_query(
        "category, SUM(amount) AS total",
        transaction_type,
        from,
        to,
    );
    query.push(" GROUP BY category ORDER BY total DESC");

    let rows = query
        .build_query_as::<CategoryRow>()
        .fetch_all(pool)
        .await?;
    Ok(rows
        .into_iter()
        .map(|row| CategoryTotal {
            category: row.category,
            total: row.total,
        })
        .collect())
}

#[tracing::instrument(skip(pool))]
pub async fn count_clients(pool: &PgPool, status: Option<ClientStatus>) -> Result<i64> {
    let mut query = QueryBuilder::new("SELECT COUNT(*) FROM clients");
    if let Some(status) = status {
        query.push(" WHERE status = ").push_bind(status.to_string());
    }
    let count = query.build_query_scalar::<i64>().fetch_one(pool).await?;
    Ok(count)
}

#[tracing::instrument(skip(pool))]
pub async fn count_projects(pool: &PgPool, status: Option<ProjectStatus>) -> Result<i64> {
    let mut query = QueryBuilder::new("SELECT COUNT(*) FROM projects");
    if let Some(status) = status {
        query.push(" WHERE status = ").push_bind(status.to_string());
    }
    let count = query.build_query_scalar::<i64>().fetch_one(pool).await?;
    Ok(count)
}

#[derive(Debug, sqlx::FromRow)]
struct TrendRow {
    year: i32,
    month: i32,
    total: f64,
}

/// Completed income grouped by calendar month since `from`, chronologically
/// ascending. Months with no matching transactions produce no bucket.
#[tracing::instrument(skip(pool))]
pub async fn monthly_income_trend(
    pool: &PgPool,
    from: DateTime<Utc>,
) -> Result<Vec<MonthlyTrendPoint>> {
    let rows = sqlx::query_as::<_, TrendRow>(
        "SELECT EXTRACT(YEAR FROM date)::INT4 AS year, EXTRACT(MONTH FROM date)::INT4 AS month, \
         SUM(amount) AS total \
         FROM transactions \
         WHERE type = 'income' AND status = 'completed' AND date >= $1 \
         GROUP BY 1, 2 \
         ORDER BY 1, 2",
    )
    .bind(from)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| MonthlyTrendPoint {
            year: row.year,
            month: row.month,
            total: row.total,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 15, 30, 0).unwrap()
    }

    #[test]
    fn month_window_starts_on_the_first() {
        let start = start_of_month(at(2026, 8, 7));
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn year_window_starts_in_january() {
        let start = start_of_year(at(2026, 8, 7));
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn months_back_rolls_over_year_boundaries() {
        assert_eq!(
            months_back(at(2026, 2, 15), 6),
            Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            months_back(at(2026, 8, 7), 6),
            Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            months_back(at(2026, 1, 1), 12),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn window_query_pins_completed_status() {
        let query = completed_window_query(
            "COALESCE(SUM(amount), 0)",
            TransactionType::Income,
            Some(at(2026, 8, 1)),
            None,
        );
        let sql = query.sql();
        assert!(sql.contains("WHERE type = $1"));
        assert!(sql.contains("AND status = 'completed'"));
        assert!(sql.contains("AND date >= $2"));
    }
}
