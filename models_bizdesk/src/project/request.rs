use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::task::{TaskPriority, TaskRecord, TaskStatus};
use super::{ProjectPriority, ProjectRecord, ProjectStatus};
use crate::{require, require_if_present, ValidationError};

fn validate_progress(progress: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&progress) {
        return Err(ValidationError(
            "progress must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(pattern = "owned", setter(into))]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub description: Option<String>,
    /// The owning client, required
    pub client: Uuid,
    #[serde(default)]
    #[builder(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    #[builder(default)]
    pub budget: f64,
    #[serde(default)]
    #[builder(default)]
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    #[builder(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[builder(default)]
    pub priority: ProjectPriority,
    #[serde(default)]
    #[builder(default)]
    pub team_members: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub progress: f64,
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        validate_progress(self.progress)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub client: Option<Uuid>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub spent: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub priority: Option<ProjectPriority>,
    pub team_members: Option<Vec<String>>,
    pub progress: Option<f64>,
}

impl UpdateProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_if_present("name", self.name.as_ref())?;
        if let Some(progress) = self.progress {
            validate_progress(progress)?;
        }
        Ok(())
    }

    pub fn apply(self, record: &mut ProjectRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(client) = self.client {
            record.client_id = client;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(budget) = self.budget {
            record.budget = budget;
        }
        if let Some(spent) = self.spent {
            record.spent = spent;
        }
        if let Some(start_date) = self.start_date {
            record.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            record.end_date = Some(end_date);
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
        if let Some(team_members) = self.team_members {
            record.team_member_ids = team_members;
        }
        if let Some(progress) = self.progress {
            record.progress = progress;
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(pattern = "owned", setter(into))]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    #[builder(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub status: TaskStatus,
    #[serde(default)]
    #[builder(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    #[builder(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[builder(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_if_present("title", self.title.as_ref())
    }

    pub fn apply(self, record: &mut TaskRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
        if let Some(assigned_to) = self.assigned_to {
            record.assigned_to = Some(assigned_to);
        }
        if let Some(due_date) = self.due_date {
            record.due_date = Some(due_date);
        }
        if let Some(completed_at) = self.completed_at {
            record.completed_at = Some(completed_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_out_of_range_is_rejected() {
        let request = CreateProjectRequestBuilder::default()
            .name("Launch")
            .client(Uuid::nil())
            .start_date(Utc::now())
            .progress(120.0)
            .build()
            .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn task_merge_keeps_unset_fields() {
        let mut record = TaskRecord {
            id: Uuid::nil(),
            title: "Draft copy".to_string(),
            description: Some("homepage".to_string()),
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            assigned_to: Some("user-1".to_string()),
            due_date: None,
            completed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        UpdateTaskRequest {
            status: Some(TaskStatus::Completed),
            completed_at: Some(Utc::now()),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(record.status, TaskStatus::Completed);
        assert!(record.completed_at.is_some());
        assert_eq!(record.title, "Draft copy");
        assert_eq!(record.priority, TaskPriority::High);
    }
}
