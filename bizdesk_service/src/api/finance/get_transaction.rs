use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::transaction::response::GetTransactionResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Returns one transaction with its client and project resolved in full.
#[utoipa::path(
    get,
    operation_id = "get_transaction",
    path = "/api/finance/{id}",
    params(("id" = Uuid, Path, description = "ID of the transaction")),
    responses(
        (status = 200, body = GetTransactionResponse),
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
) -> Result<Json<GetTransactionResponse>, ApiError> {
    let transaction = bizdesk_db_client::transaction::get_transaction(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Transaction"))?;
    Ok(Json(GetTransactionResponse { transaction }))
}
