use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::user::UserRef;

pub mod request;
pub mod response;

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TargetType {
    Revenue,
    Projects,
    Clients,
    Tasks,
    Custom,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TargetPeriod {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// Terminal states are caller-driven; progress never moves status on its own
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
pub enum TargetStatus {
    #[default]
    Active,
    Completed,
    Failed,
    Cancelled,
}

/// Derived display value: capped percentage of target reached. With a
/// non-positive target the prior value is kept as-is.
pub fn compute_progress(current_value: f64, target_value: f64, prior: f64) -> f64 {
    if target_value > 0.0 {
        (current_value / target_value * 100.0).min(100.0)
    } else {
        prior
    }
}

/// A target row as stored, assignees kept as raw ids
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub period: TargetPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(rename = "assignedTo")]
    pub assigned_to_ids: Vec<String>,
    pub status: TargetStatus,
    pub progress: f64,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TargetRecord {
    /// Re-derive progress from the current values, keeping the prior value
    /// when the target is zero
    pub fn recompute_progress(&mut self) {
        self.progress = compute_progress(self.current_value, self.target_value, self.progress);
    }
}

/// A target with its assignees and creator resolved
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub period: TargetPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub assigned_to: Vec<UserRef>,
    pub status: TargetStatus,
    pub progress: f64,
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_capped_at_100() {
        assert_eq!(compute_progress(150.0, 100.0, 0.0), 100.0);
        assert_eq!(compute_progress(50.0, 100.0, 0.0), 50.0);
    }

    #[test]
    fn zero_target_keeps_prior_progress() {
        assert_eq!(compute_progress(50.0, 0.0, 37.5), 37.5);
        assert_eq!(compute_progress(50.0, -10.0, 0.0), 0.0);
    }

    #[test]
    fn recompute_updates_in_place() {
        let mut record = TargetRecord {
            id: Uuid::nil(),
            name: "Q3 revenue".to_string(),
            description: None,
            target_type: TargetType::Revenue,
            target_value: 20000.0,
            current_value: 5000.0,
            unit: "currency".to_string(),
            period: TargetPeriod::Quarterly,
            start_date: Utc::now(),
            end_date: Utc::now(),
            assigned_to_ids: vec![],
            status: TargetStatus::Active,
            progress: 0.0,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        record.recompute_progress();
        assert_eq!(record.progress, 25.0);

        // status stays wherever the caller put it, even at 100%
        record.current_value = 40000.0;
        record.recompute_progress();
        assert_eq!(record.progress, 100.0);
        assert_eq!(record.status, TargetStatus::Active);
    }
}
