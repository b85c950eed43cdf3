use anyhow::Result;
use models_bizdesk::project::request::CreateProjectRequest;
use models_bizdesk::project::ProjectRecord;
use sqlx::PgPool;

use super::{ProjectRow, PROJECT_COLUMNS};

#[tracing::instrument(skip(pool, request))]
pub async fn create_project(
    pool: &PgPool,
    request: &CreateProjectRequest,
    created_by: Option<&str>,
) -> Result<ProjectRecord> {
    let query = format!(
        "INSERT INTO projects (name, description, client_id, status, budget, spent, start_date, \
         end_date, priority, team_members, progress, created_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
         RETURNING {PROJECT_COLUMNS}"
    );

    let row = sqlx::query_as::<_, ProjectRow>(&query)
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.client)
        .bind(request.status.to_string())
        .bind(request.budget)
        .bind(request.spent)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.priority.to_string())
        .bind(&request.team_members)
        .bind(request.progress)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

    row.try_into()
}
