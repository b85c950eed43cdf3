use axum::extract::{Query, State};
use axum::Json;
use bizdesk_db_client::stats;
use chrono::{DateTime, Utc};
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::transaction::response::{FinanceSummary, FinanceSummaryResponse};
use models_bizdesk::transaction::TransactionType;
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Completed-transaction totals and per-category breakdowns over an optional
/// date window. Recomputed in full on every call.
#[utoipa::path(
    get,
    operation_id = "finance_summary_stats",
    path = "/api/finance/summary/stats",
    params(Params),
    responses(
        (status = 200, body = FinanceSummaryResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "finance"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Query(Params {
        start_date,
        end_date,
    }): Query<Params>,
) -> Result<Json<FinanceSummaryResponse>, ApiError> {
    let total_income =
        stats::completed_total(&ctx.db, TransactionType::Income, start_date, end_date).await?;
    let total_expense =
        stats::completed_total(&ctx.db, TransactionType::Expense, start_date, end_date).await?;

    let income_by_category =
        stats::category_totals(&ctx.db, TransactionType::Income, start_date, end_date).await?;
    let expense_by_category =
        stats::category_totals(&ctx.db, TransactionType::Expense, start_date, end_date).await?;

    Ok(Json(FinanceSummaryResponse {
        summary: FinanceSummary::new(total_income, total_expense),
        income_by_category,
        expense_by_category,
    }))
}
