use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use models_bizdesk::client::request::UpdateClientRequest;
use models_bizdesk::client::response::ClientMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Merge-replaces the stored client: absent fields stay untouched.
#[utoipa::path(
    put,
    operation_id = "update_client",
    path = "/api/clients/{id}",
    params(("id" = Uuid, Path, description = "ID of the client")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, body = ClientMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "clients"
)]
#[tracing::instrument(skip(ctx, payload))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateClientRequest>, JsonRejection>,
) -> Result<Json<ClientMutatedResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let mut record = bizdesk_db_client::client::fetch_record(&ctx.db, id)
        .await?
        .ok_or(ApiError::NotFound("Client"))?;
    request.apply(&mut record);

    let saved = bizdesk_db_client::client::save_client(&ctx.db, &record)
        .await?
        .ok_or(ApiError::NotFound("Client"))?;
    let client = bizdesk_db_client::client::populate(&ctx.db, saved).await?;

    Ok(Json(ClientMutatedResponse {
        message: "Client updated successfully".to_string(),
        client,
    }))
}
