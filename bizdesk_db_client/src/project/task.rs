//! Task rows live in their own table keyed by (project_id, id) so concurrent
//! edits to one project's task list touch single rows instead of racing on a
//! whole embedded document. Tasks remain addressable only through their
//! parent project.

use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use models_bizdesk::project::task::{Task, TaskPriority, TaskRecord, TaskStatus};
use models_bizdesk::project::request::CreateTaskRequest;
use sqlx::PgPool;
use uuid::Uuid;

use crate::user_profile;

pub(crate) const TASK_COLUMNS: &str = "id, project_id, title, description, status, priority, \
     assigned_to, due_date, completed_at, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct TaskRow {
    id: Uuid,
    project_id: Uuid,
    title: String,
    description: Option<String>,
    status: String,
    priority: String,
    assigned_to: Option<String>,
    due_date: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for TaskRecord {
    type Error = anyhow::Error;

    fn try_from(row: TaskRow) -> Result<Self> {
        Ok(TaskRecord {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status.parse::<TaskStatus>()?,
            priority: row.priority.parse::<TaskPriority>()?,
            assigned_to: row.assigned_to,
            due_date: row.due_date,
            completed_at: row.completed_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Appends a task to the project's list with a freshly assigned identity
#[tracing::instrument(skip(pool, request))]
pub async fn add_task(
    pool: &PgPool,
    project_id: Uuid,
    request: &CreateTaskRequest,
) -> Result<TaskRecord> {
    let query = format!(
        "INSERT INTO tasks (project_id, title, description, status, priority, assigned_to, \
         due_date, completed_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {TASK_COLUMNS}"
    );

    let row = sqlx::query_as::<_, TaskRow>(&query)
        .bind(project_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.status.to_string())
        .bind(request.priority.to_string())
        .bind(&request.assigned_to)
        .bind(request.due_date)
        .bind(request.completed_at)
        .fetch_one(pool)
        .await?;

    row.try_into()
}

/// The stored task, looked up under its scoped identity
pub async fn fetch_record(
    pool: &PgPool,
    project_id: Uuid,
    task_id: Uuid,
) -> Result<Option<TaskRecord>> {
    let query = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1 AND project_id = $2");
    let row = sqlx::query_as::<_, TaskRow>(&query)
        .bind(task_id)
        .bind(project_id)
        .fetch_optional(pool)
        .await?;
    row.map(TaskRecord::try_from).transpose()
}

/// Writes a merged task back under its scoped identity
#[tracing::instrument(skip(pool, record))]
pub async fn save_task(
    pool: &PgPool,
    project_id: Uuid,
    record: &TaskRecord,
) -> Result<Option<TaskRecord>> {
    let query = format!(
        "UPDATE tasks SET title = $1, description = $2, status = $3, priority = $4, \
         assigned_to = $5, due_date = $6, completed_at = $7, updated_at = now() \
         WHERE id = $8 AND project_id = $9 \
         RETURNING {TASK_COLUMNS}"
    );

    let row = sqlx::query_as::<_, TaskRow>(&query)
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.status.to_string())
        .bind(record.priority.to_string())
        .bind(&record.assigned_to)
        .bind(record.due_date)
        .bind(record.completed_at)
        .bind(record.id)
        .bind(project_id)
        .fetch_optional(pool)
        .await?;

    row.map(TaskRecord::try_from).transpose()
}

/// Removes a task by scoped identity; false when it was not there
#[tracing::instrument(skip(pool))]
pub async fn delete_task(pool: &PgPool, project_id: Uuid, task_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND project_id = $2")
        .bind(task_id)
        .bind(project_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// One project's task list in insertion order
pub async fn records_for_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<TaskRecord>> {
    let query =
        format!("SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY created_at");
    let rows = sqlx::query_as::<_, TaskRow>(&query)
        .bind(project_id)
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(TaskRecord::try_from).collect()
}

/// Task lists for a batch of projects, grouped by parent
pub(crate) async fn records_by_project(
    pool: &PgPool,
    project_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<TaskRecord>>> {
    if project_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query =
        format!("SELECT {TASK_COLUMNS} FROM tasks WHERE project_id = ANY($1) ORDER BY created_at");
    let rows = sqlx::query_as::<_, TaskRow>(&query)
        .bind(project_ids)
        .fetch_all(pool)
        .await?;

    let mut grouped: HashMap<Uuid, Vec<TaskRecord>> = HashMap::new();
    for row in rows {
        let project_id = row.project_id;
        grouped
            .entry(project_id)
            .or_default()
            .push(TaskRecord::try_from(row)?);
    }
    Ok(grouped)
}

/// One project's task list with assignees resolved
pub(crate) async fn populated_for_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Task>> {
    let records = records_for_project(pool, project_id).await?;
    let assignee_ids: Vec<String> = records
        .iter()
        .filter_map(|record| record.assigned_to.clone())
        .collect();
    let refs = user_profile::get_refs(pool, &assignee_ids).await?;

    Ok(records
        .into_iter()
        .map(|record| {
            let assigned_to = record
                .assigned_to
                .as_ref()
                .and_then(|id| refs.get(id).cloned());
            Task::from_record(record, assigned_to)
        })
        .collect())
}
