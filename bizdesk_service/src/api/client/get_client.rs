use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::client::response::GetClientResponse;
use models_bizdesk::response::ErrorResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[utoipa::path(
    get,
    operation_id = "get_client",
    path = "/api/clients/{id}",
    params(("id" = Uuid, Path, description = "ID of the client")),
    responses(
        (status = 200, body = GetClientResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "clients"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetClientResponse>, ApiError> {
    let client = bizdesk_db_client::client::get_client(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Client"))?;
    Ok(Json(GetClientResponse { client }))
}
