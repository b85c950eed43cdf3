use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{TargetPeriod, TargetRecord, TargetStatus, TargetType};
use crate::{require, require_if_present, ValidationError};

fn default_unit() -> String {
    "number".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(pattern = "owned", setter(into))]
pub struct CreateTargetRequest {
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub target_value: f64,
    #[serde(default)]
    #[builder(default)]
    pub current_value: f64,
    #[serde(default = "default_unit")]
    #[builder(default = "default_unit()")]
    pub unit: String,
    pub period: TargetPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    #[builder(default)]
    pub assigned_to: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub status: TargetStatus,
}

impl CreateTargetRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }

    /// The derived progress this target starts out with
    pub fn initial_progress(&self) -> f64 {
        super::compute_progress(self.current_value, self.target_value, 0.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTargetRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub target_type: Option<TargetType>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    pub period: Option<TargetPeriod>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<Vec<String>>,
    pub status: Option<TargetStatus>,
}

impl UpdateTargetRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_if_present("name", self.name.as_ref())
    }

    /// Merge into the stored record and re-derive progress
    pub fn apply(self, record: &mut TargetRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(target_type) = self.target_type {
            record.target_type = target_type;
        }
        if let Some(target_value) = self.target_value {
            record.target_value = target_value;
        }
        if let Some(current_value) = self.current_value {
            record.current_value = current_value;
        }
        if let Some(unit) = self.unit {
            record.unit = unit;
        }
        if let Some(period) = self.period {
            record.period = period;
        }
        if let Some(start_date) = self.start_date {
            record.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            record.end_date = end_date;
        }
        if let Some(assigned_to) = self.assigned_to {
            record.assigned_to_ids = assigned_to;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        record.recompute_progress();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn stored() -> TargetRecord {
        TargetRecord {
            id: Uuid::nil(),
            name: "New clients".to_string(),
            description: None,
            target_type: TargetType::Clients,
            target_value: 10.0,
            current_value: 4.0,
            unit: default_unit(),
            period: TargetPeriod::Monthly,
            start_date: Utc::now(),
            end_date: Utc::now(),
            assigned_to_ids: vec![],
            status: TargetStatus::Active,
            progress: 40.0,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn create_starts_with_derived_progress() {
        let request = CreateTargetRequestBuilder::default()
            .name("Q3 revenue")
            .target_type(TargetType::Revenue)
            .target_value(20000.0)
            .current_value(5000.0)
            .period(TargetPeriod::Quarterly)
            .start_date(Utc::now())
            .end_date(Utc::now())
            .build()
            .unwrap();
        assert_eq!(request.initial_progress(), 25.0);
    }

    #[test]
    fn create_with_zero_target_starts_at_zero() {
        let request = CreateTargetRequestBuilder::default()
            .name("Custom")
            .target_type(TargetType::Custom)
            .target_value(0.0)
            .current_value(12.0)
            .period(TargetPeriod::Monthly)
            .start_date(Utc::now())
            .end_date(Utc::now())
            .build()
            .unwrap();
        assert_eq!(request.initial_progress(), 0.0);
    }

    #[test]
    fn update_recomputes_progress() {
        let mut record = stored();
        UpdateTargetRequest {
            current_value: Some(9.0),
            ..Default::default()
        }
        .apply(&mut record);
        assert_eq!(record.progress, 90.0);
    }

    #[test]
    fn update_with_zero_target_keeps_prior_progress() {
        let mut record = stored();
        UpdateTargetRequest {
            target_value: Some(0.0),
            current_value: Some(99.0),
            ..Default::default()
        }
        .apply(&mut record);
        assert_eq!(record.progress, 40.0);
    }

    #[test]
    fn status_is_independent_of_progress() {
        let mut record = stored();
        UpdateTargetRequest {
            current_value: Some(10.0),
            ..Default::default()
        }
        .apply(&mut record);
        assert_eq!(record.progress, 100.0);
        assert_eq!(record.status, TargetStatus::Active);

        UpdateTargetRequest {
            status: Some(TargetStatus::Failed),
            ..Default::default()
        }
        .apply(&mut record);
        assert_eq!(record.status, TargetStatus::Failed);
        assert_eq!(record.progress, 100.0);
    }
}
