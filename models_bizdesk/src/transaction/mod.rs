use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::client::{ClientRecord, ClientSummary};
use crate::project::{ProjectRecord, ProjectSummary};
use crate::user::UserRef;

pub mod request;
pub mod response;

/// Income or expense; the sign of `amount` carries no meaning on its own
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
pub enum TransactionType {
    Income,
    Expense,
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
pub enum PaymentMethod {
    Cash,
    #[default]
    BankTransfer,
    CreditCard,
    Paypal,
    Other,
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
pub enum TransactionStatus {
    Pending,
    #[default]
    Completed,
    Cancelled,
}

/// A transaction row as stored, references kept as raw ids
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(rename = "client")]
    pub client_id: Option<Uuid>,
    #[serde(rename = "project")]
    pub project_id: Option<Uuid>,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    pub invoice_number: Option<String>,
    pub attachments: Vec<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List-shape transaction: references resolved to projections
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub client: Option<ClientSummary>,
    pub project: Option<ProjectSummary>,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    pub invoice_number: Option<String>,
    pub attachments: Vec<String>,
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Get-shape transaction: full related records
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub client: Option<ClientRecord>,
    pub project: Option<ProjectRecord>,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    pub invoice_number: Option<String>,
    pub attachments: Vec<String>,
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings() {
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "bank-transfer");
        assert_eq!(PaymentMethod::CreditCard.to_string(), "credit-card");
        assert_eq!(
            "bank-transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert_eq!(TransactionType::Income.to_string(), "income");
    }

    #[test]
    fn type_field_serializes_under_type_key() {
        let record = TransactionRecord {
            id: Uuid::nil(),
            transaction_type: TransactionType::Expense,
            category: "Software".to_string(),
            amount: 49.0,
            description: None,
            date: Utc::now(),
            client_id: None,
            project_id: None,
            payment_method: PaymentMethod::CreditCard,
            status: TransactionStatus::Completed,
            invoice_number: None,
            attachments: vec![],
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], serde_json::json!("expense"));
        assert_eq!(value["paymentMethod"], serde_json::json!("credit-card"));
    }
}
