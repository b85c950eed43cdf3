use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::target::request::CreateTargetRequest;
use models_bizdesk::target::response::TargetMutatedResponse;
use models_bizdesk::user::UserContext;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

/// Creates a target; its progress starts at the derived percentage of the
/// target already reached (or 0 when the target value is not positive).
#[utoipa::path(
    post,
    operation_id = "create_target",
    path = "/api/targets",
    request_body = CreateTargetRequest,
    responses(
        (status = 201, body = TargetMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "targets"
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = ?user_context.user_id))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    payload: Result<Json<CreateTargetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TargetMutatedResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let actor = user_context.actor();
    let record =
        bizdesk_db_client::target::create_target(&ctx.db, &request, actor.as_deref()).await?;
    let target = bizdesk_db_client::target::populate(&ctx.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(TargetMutatedResponse {
            message: "Target created successfully".to_string(),
            target,
        }),
    ))
}
