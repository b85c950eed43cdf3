use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Address, ClientRecord, ClientStatus};
use crate::{require, require_if_present, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(pattern = "owned", setter(into))]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    #[builder(default)]
    pub phone: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub company: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub address: Address,
    #[serde(default)]
    #[builder(default)]
    pub status: ClientStatus,
    #[serde(default)]
    #[builder(default)]
    pub total_revenue: f64,
    #[serde(default)]
    #[builder(default)]
    pub project_count: i32,
    #[serde(default)]
    #[builder(default)]
    pub notes: Option<String>,
}

impl CreateClientRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        Ok(())
    }
}

/// Merge-replace payload: absent fields leave the stored record untouched
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<Address>,
    pub status: Option<ClientStatus>,
    pub total_revenue: Option<f64>,
    pub project_count: Option<i32>,
    pub notes: Option<String>,
}

impl UpdateClientRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_if_present("name", self.name.as_ref())?;
        require_if_present("email", self.email.as_ref())?;
        Ok(())
    }

    pub fn apply(self, record: &mut ClientRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(phone) = self.phone {
            record.phone = Some(phone);
        }
        if let Some(company) = self.company {
            record.company = Some(company);
        }
        if let Some(address) = self.address {
            record.address = address;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(total_revenue) = self.total_revenue {
            record.total_revenue = total_revenue;
        }
        if let Some(project_count) = self.project_count {
            record.project_count = project_count;
        }
        if let Some(notes) = self.notes {
            record.notes = Some(notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn stored() -> ClientRecord {
        ClientRecord {
            id: Uuid::nil(),
            name: "Acme".to_string(),
            email: "billing@acme.test".to_string(),
            phone: Some("555-0100".to_string()),
            company: Some("Acme Corp".to_string()),
            address: Address::default(),
            status: ClientStatus::Active,
            total_revenue: 100.0,
            project_count: 1,
            notes: None,
            created_by: Some("user-1".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn create_requires_name_and_email() {
        let request = CreateClientRequestBuilder::default()
            .name("")
            .email("a@b.test")
            .build()
            .unwrap();
        assert_eq!(request.validate(), Err(ValidationError::required("name")));
    }

    #[test]
    fn merge_leaves_absent_fields_untouched() {
        let mut record = stored();
        UpdateClientRequest {
            status: Some(ClientStatus::Inactive),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(record.status, ClientStatus::Inactive);
        assert_eq!(record.name, "Acme");
        assert_eq!(record.phone.as_deref(), Some("555-0100"));
        assert_eq!(record.total_revenue, 100.0);
    }

    #[test]
    fn rollups_are_directly_editable() {
        let mut record = stored();
        UpdateClientRequest {
            total_revenue: Some(9999.0),
            project_count: Some(7),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(record.total_revenue, 9999.0);
        assert_eq!(record.project_count, 7);
    }
}
