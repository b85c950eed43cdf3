use anyhow::Result;
use models_bizdesk::client::request::CreateClientRequest;
use models_bizdesk::client::ClientRecord;
use sqlx::PgPool;

use super::{ClientRow, CLIENT_COLUMNS};

#[tracing::instrument(skip(pool, request))]
pub async fn create_client(
    pool: &PgPool,
    request: &CreateClientRequest,
    created_by: Option<&str>,
) -> Result<ClientRecord> {
    let query = format!(
        "INSERT INTO clients (name, email, phone, company, address_street, address_city, \
         address_state, address_country, address_zip_code, status, total_revenue, project_count, \
         notes, created_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
         RETURNING {CLIENT_COLUMNS}"
    );

    let row = sqlx::query_as::<_, ClientRow>(&query)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.company)
        .bind(&request.address.street)
        .bind(&request.address.city)
        .bind(&request.address.state)
        .bind(&request.address.country)
        .bind(&request.address.zip_code)
        .bind(request.status.to_string())
        .bind(request.total_revenue)
        .bind(request.project_count)
        .bind(&request.notes)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

    row.try_into()
}
