use anyhow::Result;
use models_bizdesk::client::ClientRecord;
use sqlx::PgPool;

use super::{ClientRow, CLIENT_COLUMNS};

/// Writes a merged record back, replacing the whole row.
/// Returns None when the client disappeared between fetch and save.
#[tracing::instrument(skip(pool, record))]
pub async fn save_client(pool: &PgPool, record: &ClientRecord) -> Result<Option<ClientRecord>> {
    let query = format!(
        "UPDATE clients SET name = $1, email = $2, phone = $3, company = $4, \
         address_street = $5, address_city = $6, address_state = $7, address_country = $8, \
         address_zip_code = $9, status = $10, total_revenue = $11, project_count = $12, \
         notes = $13, updated_at = now() \
         WHERE id = $14 \
         RETURNING {CLIENT_COLUMNS}"
    );

    let row = sqlx::query_as::<_, ClientRow>(&query)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.company)
        .bind(&record.address.street)
        .bind(&record.address.city)
        .bind(&record.address.state)
        .bind(&record.address.country)
        .bind(&record.address.zip_code)
        .bind(record.status.to_string())
        .bind(record.total_revenue)
        .bind(record.project_count)
        .bind(&record.notes)
        .bind(record.id)
        .fetch_optional(pool)
        .await?;

    row.map(ClientRecord::try_from).transpose()
}
