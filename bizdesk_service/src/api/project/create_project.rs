use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use models_bizdesk::project::request::CreateProjectRequest;
use models_bizdesk::project::response::ProjectMutatedResponse;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::user::UserContext;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[utoipa::path(
    post,
    operation_id = "create_project",
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, body = ProjectMutatedResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, user_context, payload), fields(user_id = ?user_context.user_id))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    user_context: Extension<UserContext>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectMutatedResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let actor = user_context.actor();
    let record =
        bizdesk_db_client::project::create_project(&ctx.db, &request, actor.as_deref()).await?;
    let project = bizdesk_db_client::project::populate_detail(&ctx.db, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectMutatedResponse {
            message: "Project created successfully".to_string(),
            project,
        }),
    ))
}
