use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::user::UserRef;

pub mod request;
pub mod response;

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
pub enum DocumentCategory {
    Contract,
    Invoice,
    Receipt,
    Report,
    Presentation,
    #[default]
    Other,
}

/// The optional polymorphic relation of a document, as a tagged union so the
/// discriminator and id can never disagree
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(tag = "model", content = "id")]
pub enum RelatedTo {
    Client(Uuid),
    Project(Uuid),
    Transaction(Uuid),
}

impl RelatedTo {
    /// the discriminator as stored in the database
    pub fn model(&self) -> &'static str {
        match self {
            RelatedTo::Client(_) => "Client",
            RelatedTo::Project(_) => "Project",
            RelatedTo::Transaction(_) => "Transaction",
        }
    }

    /// the referenced id as stored in the database
    pub fn id(&self) -> Uuid {
        match self {
            RelatedTo::Client(id) | RelatedTo::Project(id) | RelatedTo::Transaction(id) => *id,
        }
    }

    /// rebuild the union from its stored (model, id) pair
    pub fn from_parts(model: &str, id: Uuid) -> Option<Self> {
        match model {
            "Client" => Some(RelatedTo::Client(id)),
            "Project" => Some(RelatedTo::Project(id)),
            "Transaction" => Some(RelatedTo::Transaction(id)),
            _ => None,
        }
    }
}

/// A document metadata record; the file itself lives at an external url
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: DocumentCategory,
    pub related_to: Option<RelatedTo>,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A document with its uploader resolved
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: DocumentCategory,
    pub related_to: Option<RelatedTo>,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub uploaded_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn from_record(record: DocumentRecord, uploaded_by: Option<UserRef>) -> Self {
        Document {
            id: record.id,
            name: record.name,
            description: record.description,
            file_url: record.file_url,
            file_type: record.file_type,
            file_size: record.file_size,
            category: record.category,
            related_to: record.related_to,
            tags: record.tags,
            is_public: record.is_public,
            uploaded_by,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_to_round_trips_as_tagged_object() {
        let id = Uuid::new_v4();
        let related = RelatedTo::Client(id);
        let value = serde_json::to_value(related).unwrap();
        assert_eq!(value["model"], serde_json::json!("Client"));
        assert_eq!(value["id"], serde_json::json!(id.to_string()));

        let back: RelatedTo = serde_json::from_value(value).unwrap();
        assert_eq!(back, related);
    }

    #[test]
    fn unknown_model_is_rejected() {
        let value = serde_json::json!({"model": "Invoice", "id": Uuid::nil().to_string()});
        assert!(serde_json::from_value::<RelatedTo>(value).is_err());
        assert_eq!(RelatedTo::from_parts("Invoice", Uuid::nil()), None);
    }

    #[test]
    fn parts_round_trip() {
        let id = Uuid::new_v4();
        for related in [
            RelatedTo::Client(id),
            RelatedTo::Project(id),
            RelatedTo::Transaction(id),
        ] {
            assert_eq!(
                RelatedTo::from_parts(related.model(), related.id()),
                Some(related)
            );
        }
    }
}
