use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Client;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ListClientsResponse {
    pub clients: Vec<Client>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GetClientResponse {
    pub client: Client,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ClientMutatedResponse {
    pub message: String,
    pub client: Client,
}
