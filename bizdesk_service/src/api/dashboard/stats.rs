use axum::extract::State;
use axum::Json;
use bizdesk_db_client::stats;
use bizdesk_db_client::target::TargetListFilter;
use chrono::Utc;
use models_bizdesk::client::ClientStatus;
use models_bizdesk::dashboard::{
    ClientCounts, DashboardStatsResponse, FinancialSnapshot, ProjectCounts,
};
use models_bizdesk::project::ProjectStatus;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::target::TargetStatus;
use models_bizdesk::transaction::TransactionType;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// How many active targets the dashboard surfaces
const ACTIVE_TARGET_LIMIT: i64 = 5;
/// How many recent transactions the dashboard surfaces
const RECENT_TRANSACTION_LIMIT: i64 = 10;
/// How far the trailing revenue trend reaches, in calendar months
const TREND_MONTHS: u32 = 6;

/// One read-only snapshot of the whole business: calendar-window financial
/// sums, entity counts, the freshest targets and transactions, and the
/// trailing revenue trend. Recomputed in full on every call.
#[utoipa::path(
    get,
    operation_id = "dashboard_stats",
    path = "/api/dashboard/stats",
    responses(
        (status = 200, body = DashboardStatsResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "dashboard"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
) -> Result<Json<DashboardStatsResponse>, ApiError> {
    let now = Utc::now();
    let month_start = stats::start_of_month(now);
    let year_start = stats::start_of_year(now);

    let monthly_income =
        stats::completed_total(&ctx.db, TransactionType::Income, Some(month_start), None).await?;
    let monthly_expense =
        stats::completed_total(&ctx.db, TransactionType::Expense, Some(month_start), None).await?;
    let yearly_income =
        stats::completed_total(&ctx.db, TransactionType::Income, Some(year_start), None).await?;

    let clients = ClientCounts {
        total: stats::count_clients(&ctx.db, None).await?,
        active: stats::count_clients(&ctx.db, Some(ClientStatus::Active)).await?,
    };

    let projects = ProjectCounts {
        total: stats::count_projects(&ctx.db, None).await?,
        active: stats::count_projects(&ctx.db, Some(ProjectStatus::Active)).await?,
        completed: stats::count_projects(&ctx.db, Some(ProjectStatus::Completed)).await?,
    };

    let active_targets = bizdesk_db_client::target::list_targets(
        &ctx.db,
        &TargetListFilter {
            status: Some(TargetStatus::Active),
            limit: Some(ACTIVE_TARGET_LIMIT),
            ..Default::default()
        },
    )
    .await?;

    let recent_transactions =
        bizdesk_db_client::transaction::recent_transactions(&ctx.db, RECENT_TRANSACTION_LIMIT)
            .await?;

    let monthly_trend =
        stats::monthly_income_trend(&ctx.db, stats::months_back(now, TREND_MONTHS)).await?;

    Ok(Json(DashboardStatsResponse {
        financial: FinancialSnapshot::new(monthly_income, monthly_expense, yearly_income),
        clients,
        projects,
        active_targets,
        recent_transactions,
        monthly_trend,
    }))
}
