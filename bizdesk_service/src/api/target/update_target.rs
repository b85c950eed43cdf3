use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::target::request::UpdateTargetRequest;
use models_bizdesk::target::response::TargetMutatedResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Merge-replaces the stored target and re-derives progress from the merged
/// values. Status is whatever the caller set; reaching 100% does not move it.
#[utoipa::path(
    put,
    operation_id = "update_target",
    path = "/api/targets/{id}",
    params(("id" = Uuid, Path, description = "ID of the target")),
    request_body = UpdateTargetRequest,
    responses(
        (status = 200, body = TargetMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "targets"
)]
#[tracing::instrument(skip(ctx, payload))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTargetRequest>, JsonRejection>,
) -> Result<Json<TargetMutatedResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let mut record = bizdesk_db_client::target::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Target"))?;
    request.apply(&mut record);

    let saved = bizdesk_db_client::target::save_target(&ctx.db, &record)
        .await?
        .ok_or(ApiError::NotFound("Target"))?;
    let target = bizdesk_db_client::target::populate(&ctx.db, saved).await?;

    Ok(Json(TargetMutatedResponse {
        message: "Target updated successfully".to_string(),
        target,
    }))
}
