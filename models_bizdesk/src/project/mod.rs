use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::client::{ClientRecord, ClientSummary};
use crate::user::UserRef;

pub mod request;
pub mod response;
pub mod task;

pub use task::{Task, TaskPriority, TaskRecord, TaskStatus};

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A project row as stored: the client and members kept as raw ids, tasks not
/// attached. This is the shape embedded when a transaction resolves its
/// project in full.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "client")]
    pub client_id: Uuid,
    pub status: ProjectStatus,
    pub budget: f64,
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    /// Absent means the project is ongoing
    pub end_date: Option<DateTime<Utc>>,
    pub priority: ProjectPriority,
    #[serde(rename = "teamMembers")]
    pub team_member_ids: Vec<String>,
    /// Client-supplied 0..=100, not derived from task completion
    pub progress: f64,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List-shape project: references resolved to projections, tasks attached raw
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub client: Option<ClientSummary>,
    pub status: ProjectStatus,
    pub budget: f64,
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub priority: ProjectPriority,
    pub team_members: Vec<UserRef>,
    pub tasks: Vec<TaskRecord>,
    pub progress: f64,
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Get-shape project: the full client record and task assignees resolved
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub client: Option<ClientRecord>,
    pub status: ProjectStatus,
    pub budget: f64,
    pub spent: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub priority: ProjectPriority,
    pub team_members: Vec<UserRef>,
    pub tasks: Vec<Task>,
    pub progress: f64,
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The name-level projection other entities resolve their project reference to
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_strings() {
        assert_eq!(ProjectStatus::OnHold.to_string(), "on-hold");
        assert_eq!(
            "on-hold".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::OnHold
        );
        assert_eq!(
            serde_json::to_value(ProjectStatus::Planning).unwrap(),
            serde_json::json!("planning")
        );
    }

    #[test]
    fn absent_end_date_serializes_as_null() {
        let record = ProjectRecord {
            id: Uuid::nil(),
            name: "Site redesign".to_string(),
            description: None,
            client_id: Uuid::nil(),
            status: ProjectStatus::Active,
            budget: 0.0,
            spent: 0.0,
            start_date: Utc::now(),
            end_date: None,
            priority: ProjectPriority::Medium,
            team_member_ids: vec![],
            progress: 0.0,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["endDate"].is_null());
        assert_eq!(value["client"], serde_json::json!(Uuid::nil().to_string()));
    }
}
