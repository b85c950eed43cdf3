use axum::extract::{Query, State};
use axum::Json;
use bizdesk_db_client::project::ProjectListFilter;
use models_bizdesk::project::response::ListProjectsResponse;
use models_bizdesk::project::ProjectStatus;
use models_bizdesk::response::ErrorResponse;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct Params {
    pub status: Option<ProjectStatus>,
    /// restrict to projects owned by one client
    pub client: Option<Uuid>,
    /// case-insensitive substring match over name and description
    pub search: Option<String>,
}

/// Lists projects, newest first, with each project's task list attached.
#[utoipa::path(
    get,
    operation_id = "list_projects",
    path = "/api/projects",
    params(Params),
    responses(
        (status = 200, body = ListProjectsResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Query(Params {
        status,
        client,
        search,
    }): Query<Params>,
) -> Result<Json<ListProjectsResponse>, ApiError> {
    let projects = bizdesk_db_client::project::list_projects(
        &ctx.db,
        &ProjectListFilter {
            status,
            client,
            search,
        },
    )
    .await?;
    Ok(Json(ListProjectsResponse { projects }))
}
