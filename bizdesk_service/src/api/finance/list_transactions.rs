use axum::extract::{Query, State};
use axum::Json;
use bizdesk_db_client::transaction::TransactionListFilter;
use chrono::{DateTime, Utc};
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::transaction::response::ListTransactionsResponse;
use models_bizdesk::transaction::TransactionType;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub client: Option<Uuid>,
    pub project: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Lists transactions, newest date first, with references resolved.
#[utoipa::path(
    get,
    operation_id = "list_transactions",
    path = "/api/finance",
    params(Params),
    responses(
        (status = 200, body = ListTransactionsResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "finance"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Query(params): Query<Params>,
) -> Result<Json<ListTransactionsResponse>, ApiError> {
    let filter = TransactionListFilter {
        transaction_type: params.transaction_type,
        client: params.client,
        project: params.project,
        start_date: params.start_date,
        end_date: params.end_date,
    };
    let transactions = bizdesk_db_client::transaction::list_transactions(&ctx.db, &filter).await?;
    Ok(Json(ListTransactionsResponse { transactions }))
}
