use axum::extract::{Query, State};
use axum::Json;
use bizdesk_db_client::target::TargetListFilter;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::target::response::ListTargetsResponse;
use models_bizdesk::target::{TargetPeriod, TargetStatus, TargetType};
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct Params {
    pub status: Option<TargetStatus>,
    #[serde(rename = "type")]
    pub target_type: Option<TargetType>,
    pub period: Option<TargetPeriod>,
}

/// Lists targets, newest first, with assignees and creators resolved.
#[utoipa::path(
    get,
    operation_id = "list_targets",
    path = "/api/targets",
    params(Params),
    responses(
        (status = 200, body = ListTargetsResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "targets"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Query(params): Query<Params>,
) -> Result<Json<ListTargetsResponse>, ApiError> {
    let filter = TargetListFilter {
        status: params.status,
        target_type: params.target_type,
        period: params.period,
        limit: None,
    };
    let targets = bizdesk_db_client::target::list_targets(&ctx.db, &filter).await?;
    Ok(Json(ListTargetsResponse { targets }))
}
