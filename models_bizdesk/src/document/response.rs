use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Document;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ListDocumentsResponse {
    pub documents: Vec<Document>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GetDocumentResponse {
    pub document: Document,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DocumentMutatedResponse {
    pub message: String,
    pub document: Document,
}
