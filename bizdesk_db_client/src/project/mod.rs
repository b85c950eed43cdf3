use anyhow::Result;
use chrono::{DateTime, Utc};
use models_bizdesk::project::{
    Project, ProjectDetail, ProjectPriority, ProjectRecord, ProjectStatus,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{client, user_profile};

mod create;
mod delete;
mod get;
pub mod task;
mod update;

pub use create::create_project;
pub use delete::delete_project;
pub use get::{fetch_record, get_project, get_summaries, list_projects};
pub use update::save_project;

pub(crate) const PROJECT_COLUMNS: &str = "id, name, description, client_id, status, budget, \
     spent, start_date, end_date, priority, team_members, progress, created_by, created_at, \
     updated_at";

/// Options accepted by [list_projects]
#[derive(Debug, Default, Clone)]
pub struct ProjectListFilter {
    pub status: Option<ProjectStatus>,
    /// restrict to projects owned by one client
    pub client: Option<Uuid>,
    /// case-insensitive substring match over name and description
    pub search: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProjectRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    client_id: Uuid,
    status: String,
    budget: f64,
    spent: f64,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    priority: String,
    team_members: Vec<String>,
    progress: f64,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for ProjectRecord {
    type Error = anyhow::Error;

    fn try_from(row: ProjectRow) -> Result<Self> {
        Ok(ProjectRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            client_id: row.client_id,
            status: row.status.parse::<ProjectStatus>()?,
            budget: row.budget,
            spent: row.spent,
            start_date: row.start_date,
            end_date: row.end_date,
            priority: row.priority.parse::<ProjectPriority>()?,
            team_member_ids: row.team_members,
            progress: row.progress,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Resolves a record into the get-shape: full client record, tasks with
/// assignees, and team member projections
pub async fn populate_detail(pool: &PgPool, record: ProjectRecord) -> Result<ProjectDetail> {
    let client = client::fetch_record(pool, record.client_id).await?;
    let tasks = task::populated_for_project(pool, record.id).await?;

    let mut user_ids: Vec<String> = record.team_member_ids.clone();
    if let Some(created_by) = &record.created_by {
        user_ids.push(created_by.clone());
    }
    let refs = user_profile::get_refs(pool, &user_ids).await?;

    let team_members = record
        .team_member_ids
        .iter()
        .filter_map(|id| refs.get(id).cloned())
        .collect();
    let created_by = record
        .created_by
        .as_ref()
        .and_then(|id| refs.get(id).cloned());

    Ok(ProjectDetail {
        id: record.id,
        name: record.name,
        description: record.description,
        client,
        status: record.status,
        budget: record.budget,
        spent: record.spent,
        start_date: record.start_date,
        end_date: record.end_date,
        priority: record.priority,
        team_members,
        tasks,
        progress: record.progress,
        created_by,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

pub(crate) async fn populate_many(
    pool: &PgPool,
    records: Vec<ProjectRecord>,
) -> Result<Vec<Project>> {
    let project_ids: Vec<Uuid> = records.iter().map(|record| record.id).collect();
    let client_ids: Vec<Uuid> = records.iter().map(|record| record.client_id).collect();
    let mut user_ids: Vec<String> = Vec::new();
    for record in &records {
        user_ids.extend(record.team_member_ids.iter().cloned());
        user_ids.extend(record.created_by.iter().cloned());
    }

    let mut tasks_by_project = task::records_by_project(pool, &project_ids).await?;
    let client_summaries = client::get_summaries(pool, &client_ids).await?;
    let refs = user_profile::get_refs(pool, &user_ids).await?;

    Ok(records
        .into_iter()
        .map(|record| {
            let team_members = record
                .team_member_ids
                .iter()
                .filter_map(|id| refs.get(id).cloned())
                .collect();
            let created_by = record
                .created_by
                .as_ref()
                .and_then(|id| refs.get(id).cloned());
            Project {
                id: record.id,
                name: record.name,
                description: record.description,
                client: client_summaries.get(&record.client_id).cloned(),
                status: record.status,
                budget: record.budget,
                spent: record.spent,
                start_date: record.start_date,
                end_date: record.end_date,
                priority: record.priority,
                team_members,
                tasks: tasks_by_project.remove(&record.id).unwrap_or_default(),
                progress: record.progress,
                created_by,
                created_at: record.created_at,
                updated_at: record.updated_at,
            }
        })
        .collect())
}
