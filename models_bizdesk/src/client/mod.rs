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
    Default,
    PartialEq,
    Eq,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

/// Postal address sub-fields, all optional
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

/// A client row as stored: references kept as raw ids.
/// This is the shape embedded when another entity resolves its client in full.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Address,
    pub status: ClientStatus,
    /// Free-standing rollup, only changed by direct edits
    pub total_revenue: f64,
    /// Free-standing rollup, only changed by direct edits
    pub project_count: i32,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A client with its creator resolved to a profile projection
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Address,
    pub status: ClientStatus,
    pub total_revenue: f64,
    pub project_count: i32,
    pub notes: Option<String>,
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn from_record(record: ClientRecord, created_by: Option<UserRef>) -> Self {
        Client {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            company: record.company,
            address: record.address,
            status: record.status,
            total_revenue: record.total_revenue,
            project_count: record.project_count,
            notes: record.notes,
            created_by,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// The name-level projection other entities resolve their client reference to
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_strings() {
        assert_eq!(ClientStatus::Active.to_string(), "active");
        assert_eq!(
            "pending".parse::<ClientStatus>().unwrap(),
            ClientStatus::Pending
        );
        assert_eq!(
            serde_json::to_value(ClientStatus::Inactive).unwrap(),
            serde_json::json!("inactive")
        );
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = ClientRecord {
            id: Uuid::nil(),
            name: "Acme".to_string(),
            email: "billing@acme.test".to_string(),
            phone: None,
            company: Some("Acme Corp".to_string()),
            address: Address::default(),
            status: ClientStatus::Active,
            total_revenue: 1200.0,
            project_count: 3,
            notes: None,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["totalRevenue"], serde_json::json!(1200.0));
        assert_eq!(value["projectCount"], serde_json::json!(3));
        assert!(value.get("total_revenue").is_none());
    }
}
