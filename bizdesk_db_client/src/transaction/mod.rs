use anyhow::Result;
use chrono::{DateTime, Utc};
use models_bizdesk::transaction::{
    PaymentMethod, Transaction, TransactionDetail, TransactionRecord, TransactionStatus,
    TransactionType,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{client, project, user_profile};

mod create;
mod delete;
mod get;
mod update;

pub use create::create_transaction;
pub use delete::delete_transaction;
pub use get::{fetch_record, get_transaction, list_transactions, recent_transactions};
pub use update::save_transaction;

pub(crate) const TRANSACTION_COLUMNS: &str = "id, type, category, amount, description, date, \
     client_id, project_id, payment_method, status, invoice_number, attachments, created_by, \
     created_at, updated_at";

/// Options accepted by [list_transactions]
#[derive(Debug, Default, Clone)]
pub struct TransactionListFilter {
    pub transaction_type: Option<TransactionType>,
    pub client: Option<Uuid>,
    pub project: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct TransactionRow {
    id: Uuid,
    #[sqlx(rename = "type")]
    transaction_type: String,
    category: String,
    amount: f64,
    description: Option<String>,
    date: DateTime<Utc>,
    client_id: Option<Uuid>,
    project_id: Option<Uuid>,
    payment_method: String,
    status: String,
    invoice_number: Option<String>,
    attachments: Vec<String>,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for TransactionRecord {
    type Error = anyhow::Error;

    fn try_from(row: TransactionRow) -> Result<Self> {
        Ok(TransactionRecord {
            id: row.id,
            transaction_type: row.transaction_type.parse::<TransactionType>()?,
            category: row.category,
            amount: row.amount,
            description: row.description,
            date: row.date,
            client_id: row.client_id,
            project_id: row.project_id,
            payment_method: row.payment_method.parse::<PaymentMethod>()?,
            status: row.status.parse::<TransactionStatus>()?,
            invoice_number: row.invoice_number,
            attachments: row.attachments,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Resolves a record into the get-shape: full client and project records
pub async fn populate_detail(
    pool: &PgPool,
    record: TransactionRecord,
) -> Result<TransactionDetail> {
    let client = match record.client_id {
        Some(id) => client::fetch_record(pool, id).await?,
        None => None,
    };
    let project = match record.project_id {
        Some(id) => project::fetch_record(pool, id).await?,
        None => None,
    };
    let created_by = user_profile::get_ref(pool, record.created_by.as_deref()).await?;

    Ok(TransactionDetail {
        id: record.id,
        transaction_type: record.transaction_type,
        category: record.category,
        amount: record.amount,
        description: record.description,
        date: record.date,
        client,
        project,
        payment_method: record.payment_method,
        status: record.status,
        invoice_number: record.invoice_number,
        attachments: record.attachments,
        created_by,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

pub(crate) async fn populate_many(
    pool: &PgPool,
    records: Vec<TransactionRecord>,
) -> Result<Vec<Transaction>> {
    let client_ids: Vec<Uuid> = records.iter().filter_map(|record| record.client_id).collect();
    let project_ids: Vec<Uuid> = records
        .iter()
        .filter_map(|record| record.project_id)
        .collect();
    let creator_ids: Vec<String> = records
        .iter()
        .filter_map(|record| record.created_by.clone())
        .collect();

    let client_summaries = client::get_summaries(pool, &client_ids).await?;
    let project_summaries = project::get_summaries(pool, &project_ids).await?;
    let refs = user_profile::get_refs(pool, &creator_ids).await?;

    Ok(records
        .into_iter()
        .map(|record| {
            let client = record
                .client_id
                .and_then(|id| client_summaries.get(&id).cloned());
            let project = record
                .project_id
                .and_then(|id| project_summaries.get(&id).cloned());
            let created_by = record
                .created_by
                .as_ref()
                .and_then(|id| refs.get(id).cloned());
            Transaction {
                id: record.id,
                transaction_type: record.transaction_type,
                category: record.category,
                amount: record.amount,
                description: record.description,
                date: record.date,
                client,
                project,
                payment_method: record.payment_method,
                status: record.status,
                invoice_number: record.invoice_number,
                attachments: record.attachments,
                created_by,
                created_at: record.created_at,
                updated_at: record.updated_at,
            }
        })
        .collect())
}
