use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use models_bizdesk::client::request::CreateClientRequest;
use models_bizdesk::client::response::ClientMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::user::UserContext;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Creates a client, stamping the acting user as its creator.
#[utoipa::path(
    post,
    operation_id = "create_client",
    path = "/api/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, body = ClientMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "clients"
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = ?user_context.user_id))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ClientMutatedResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let actor = user_context.actor();
    let record =
        bizdesk_db_client::client::create_client(&ctx.db, &request, actor.as_deref()).await?;
    let client = bizdesk_db_client::client::populate(&ctx.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(ClientMutatedResponse {
            message: "Client created successfully".to_string(),
            client,
        }),
    ))
}
