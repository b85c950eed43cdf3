use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::{ErrorResponse, MessageResponse};
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Removes the client. Projects and transactions that reference it are left
/// untouched and keep the dangling id.
#[utoipa::path(
    delete,
    operation_id = "delete_client",
    path = "/api/clients/{id}",
    params(("id" = Uuid, Path, description = "ID of the client")),
    responses(
        (status = 200, body = MessageResponse),
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
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = bizdesk_db_client::client::delete_client(&ctx.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Client"));
    }
    Ok(Json(MessageResponse::new("Client deleted successfully")))
}
