use axum::extract::{Query, State};
use axum::Json;
use bizdesk_db_client::client::ClientListFilter;
use models_bizdesk::client::response::ListClientsResponse;
use models_bizdesk::client::ClientStatus;
use models_bizdesk::response::ErrorResponse;
use serde::Deserialize;

use crate::api::context::ApiContext;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct Params {
    pub status: Option<ClientStatus>,
    /// case-insensitive substring match over name, company and email
    pub search: Option<String>,
}

/// Lists clients, newest first, with creators resolved.
#[utoipa::path(
    get,
    operation_id = "list_clients",
    path = "/api/clients",
    params(Params),
    responses(
        (status = 200, body = ListClientsResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "clients"
)]
#[tracing::instrument(skip(ctx))]
pub async fn handler(
    State(ctx): State<ApiContext>,
    Query(Params { status, search }): Query<Params>,
) -> Result<Json<ListClientsResponse>, ApiError> {
    let clients =
        bizdesk_db_client::client::list_clients(&ctx.db, &ClientListFilter { status, search })
            .await?;
    Ok(Json(ListClientsResponse { clients }))
}
