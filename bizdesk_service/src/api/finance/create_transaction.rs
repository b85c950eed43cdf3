use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::transaction::request::CreateTransactionRequest;
use models_bizdesk::transaction::response::TransactionMutatedResponse;
use models_bizdesk::user::UserContext;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Creates a transaction. Blank client/project relation fields are dropped
/// rather than rejected, so optional form fields never trip validation.
#[utoipa::path(
    post,
    operation_id = "create_transaction",
    path = "/api/finance",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, body = TransactionMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "finance"
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = ?user_context.user_id))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionMutatedResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let client_id = request.client_reference()?;
    let project_id = request.project_reference()?;

    let actor = user_context.actor();
    let record = bizdesk_db_client::transaction::create_transaction(
        &ctx.db,
        &request,
        client_id,
        project_id,
        actor.as_deref(),
    )
    .await?;
    let transaction = bizdesk_db_client::transaction::populate_detail(&ctx.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionMutatedResponse {
            message: "Transaction created successfully".to_string(),
            transaction,
        }),
    ))
}
