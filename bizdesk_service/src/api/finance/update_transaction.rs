use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::transaction::request::UpdateTransactionRequest;
use models_bizdesk::transaction::response::TransactionMutatedResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Merge-replaces the stored transaction. An explicit empty-string client or
/// project unsets the stored reference; an absent field keeps it.
#[utoipa::path(
    put,
    operation_id = "update_transaction",
    path = "/api/finance/{id}",
    params(("id" = Uuid, Path, description = "ID of the transaction")),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, body = TransactionMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "finance"
)]
#[tracing::instrument(skip(ctx, payload))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTransactionRequest>, JsonRejection>,
) -> Result<Json<TransactionMutatedResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let mut record = bizdesk_db_client::transaction::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Transaction"))?;
    request.apply(&mut record)?;

    let saved = bizdesk_db_client::transaction::save_transaction(&ctx.db, &record)
        .await?
        .ok_or(ApiError::NotFound("Transaction"))?;
    let transaction = bizdesk_db_client::transaction::populate_detail(&ctx.db, saved).await?;

    Ok(Json(TransactionMutatedResponse {
        message: "Transaction updated successfully".to_string(),
        transaction,
    }))
}
