use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::{ErrorResponse, MessageResponse};
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[utoipa::path(
    delete,
    operation_id = "delete_transaction",
    path = "/api/finance/{id}",
    params(("id" = Uuid, Path, description = "ID of the transaction")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "finance"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = bizdesk_db_client::transaction::delete_transaction(&ctx.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Transaction"));
    }
    Ok(Json(MessageResponse::new(
        "Transaction deleted successfully",
    )))
}
