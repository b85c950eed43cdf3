use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::target::response::GetTargetResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[utoipa::path(
    get,
    operation_id = "get_target",
    path = "/api/targets/{id}",
    params(("id" = Uuid, Path, description = "ID of the target")),
    responses(
        (status = 200, body = GetTargetResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "targets"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetTargetResponse>, ApiError> {
    let target = bizdesk_db_client::target::get_target(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Target"))?;
    Ok(Json(GetTargetResponse { target }))
}
