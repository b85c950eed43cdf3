use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{PaymentMethod, TransactionRecord, TransactionStatus, TransactionType};
use crate::{require, require_if_present, ValidationError};

/// Optional-but-blank relation fields arrive as empty strings from the form
/// client; they must not trip validation. On create an empty value is simply
/// dropped, on update it unsets the stored reference.
fn parse_reference(field: &str, value: &str) -> Result<Option<Uuid>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<Uuid>()
        .map(Some)
        .map_err(|_| ValidationError(format!("{field} is not a valid id")))
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(pattern = "owned", setter(into))]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    #[builder(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[builder(default)]
    pub client: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub project: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    #[builder(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    #[builder(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub attachments: Vec<String>,
}

impl CreateTransactionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("category", &self.category)
    }

    /// The client reference to store, with empty strings dropped
    pub fn client_reference(&self) -> Result<Option<Uuid>, ValidationError> {
        match &self.client {
            Some(value) => parse_reference("client", value),
            None => Ok(None),
        }
    }

    /// The project reference to store, with empty strings dropped
    pub fn project_reference(&self) -> Result<Option<Uuid>, ValidationError> {
        match &self.project {
            Some(value) => parse_reference("project", value),
            None => Ok(None),
        }
    }
}

/// Merge-replace payload. For the relation fields, absent means keep the
/// stored reference and an explicit empty string means unset it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<TransactionStatus>,
    pub invoice_number: Option<String>,
    pub attachments: Option<Vec<String>>,
}

impl UpdateTransactionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_if_present("category", self.category.as_ref())
    }

    pub fn apply(self, record: &mut TransactionRecord) -> Result<(), ValidationError> {
        if let Some(transaction_type) = self.transaction_type {
            record.transaction_type = transaction_type;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(client) = self.client {
            record.client_id = parse_reference("client", &client)?;
        }
        if let Some(project) = self.project {
            record.project_id = parse_reference("project", &project)?;
        }
        if let Some(payment_method) = self.payment_method {
            record.payment_method = payment_method;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(invoice_number) = self.invoice_number {
            record.invoice_number = Some(invoice_number);
        }
        if let Some(attachments) = self.attachments {
            record.attachments = attachments;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(client_id: Option<Uuid>) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::nil(),
            transaction_type: TransactionType::Income,
            category: "Consulting".to_string(),
            amount: 5000.0,
            description: None,
            date: Utc::now(),
            client_id,
            project_id: None,
            payment_method: PaymentMethod::BankTransfer,
            status: TransactionStatus::Completed,
            invoice_number: None,
            attachments: vec![],
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn create_drops_empty_references() {
        let request = CreateTransactionRequestBuilder::default()
            .transaction_type(TransactionType::Income)
            .category("Consulting")
            .amount(5000.0)
            .client(Some("".to_string()))
            .build()
            .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.client_reference().unwrap(), None);
    }

    #[test]
    fn update_with_empty_string_unsets_reference() {
        let existing = Uuid::new_v4();
        let mut record = stored(Some(existing));
        UpdateTransactionRequest {
            client: Some("".to_string()),
            ..Default::default()
        }
        .apply(&mut record)
        .unwrap();
        assert_eq!(record.client_id, None);
    }

    #[test]
    fn update_without_reference_field_keeps_it() {
        let existing = Uuid::new_v4();
        let mut record = stored(Some(existing));
        UpdateTransactionRequest {
            amount: Some(6000.0),
            ..Default::default()
        }
        .apply(&mut record)
        .unwrap();
        assert_eq!(record.client_id, Some(existing));
        assert_eq!(record.amount, 6000.0);
    }

    #[test]
    fn update_rejects_malformed_reference() {
        let mut record = stored(None);
        let result = UpdateTransactionRequest {
            client: Some("not-a-uuid".to_string()),
            ..Default::default()
        }
        .apply(&mut record);
        assert!(result.is_err());
    }
}
