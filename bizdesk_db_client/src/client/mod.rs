use anyhow::Result;
use chrono::{DateTime, Utc};
use models_bizdesk::client::{Address, Client, ClientRecord, ClientStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::user_profile;

mod create;
mod delete;
mod get;
mod update;

pub use create::create_client;
pub use delete::delete_client;
pub use get::{fetch_record, get_client, get_summaries, list_clients};
pub use update::save_client;

/// Column list shared by every query that reads a full client row
pub(crate) const CLIENT_COLUMNS: &str = "id, name, email, phone, company, address_street, \
     address_city, address_state, address_country, address_zip_code, status, total_revenue, \
     project_count, notes, created_by, created_at, updated_at";

/// Options accepted by [list_clients]
#[derive(Debug, Default, Clone)]
pub struct ClientListFilter {
    pub status: Option<ClientStatus>,
    /// case-insensitive substring match over name, company and email
    pub search: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ClientRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    address_street: Option<String>,
    address_city: Option<String>,
    address_state: Option<String>,
    address_country: Option<String>,
    address_zip_code: Option<String>,
    status: String,
    total_revenue: f64,
    project_count: i32,
    notes: Option<String>,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClientRow> for ClientRecord {
    type Error = anyhow::Error;

    fn try_from(row: ClientRow) -> Result<Self> {
        Ok(ClientRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            company: row.company,
            address: Address {
                street: row.address_street,
                city: row.address_city,
                state: row.address_state,
                country: row.address_country,
                zip_code: row.address_zip_code,
            },
            status: row.status.parse::<ClientStatus>()?,
            total_revenue: row.total_revenue,
            project_count: row.project_count,
            notes: row.notes,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Resolves the creator reference of a single record
pub async fn populate(pool: &PgPool, record: ClientRecord) -> Result<Client> {
    let created_by = user_profile::get_ref(pool, record.created_by.as_deref()).await?;
    Ok(Client::from_record(record, created_by))
}

pub(crate) async fn populate_many(
    pool: &PgPool,
    records: Vec<ClientRecord>,
) -> Result<Vec<Client>> {
    let creator_ids: Vec<String> = records
        .iter()
        .filter_map(|record| record.created_by.clone())
        .collect();
    let refs = user_profile::get_refs(pool, &creator_ids).await?;

    Ok(records
        .into_iter()
        .map(|record| {
            let created_by = record
                .created_by
                .as_ref()
                .and_then(|id| refs.get(id).cloned());
            Client::from_record(record, created_by)
        })
        .collect())
}
