use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DocumentCategory, DocumentRecord, RelatedTo};
use crate::{require, require_if_present, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(pattern = "owned", setter(into))]
pub struct CreateDocumentRequest {
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub description: Option<String>,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
    #[serde(default)]
    #[builder(default)]
    pub category: DocumentCategory,
    #[serde(default)]
    #[builder(default)]
    pub related_to: Option<RelatedTo>,
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub is_public: bool,
}

impl CreateDocumentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("fileUrl", &self.file_url)?;
        require("fileType", &self.file_type)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub category: Option<DocumentCategory>,
    pub related_to: Option<RelatedTo>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl UpdateDocumentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_if_present("name", self.name.as_ref())?;
        require_if_present("fileUrl", self.file_url.as_ref())?;
        require_if_present("fileType", self.file_type.as_ref())?;
        Ok(())
    }

    pub fn apply(self, record: &mut DocumentRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(file_url) = self.file_url {
            record.file_url = file_url;
        }
        if let Some(file_type) = self.file_type {
            record.file_type = file_type;
        }
        if let Some(file_size) = self.file_size {
            record.file_size = file_size;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(related_to) = self.related_to {
            record.related_to = Some(related_to);
        }
        if let Some(tags) = self.tags {
            record.tags = tags;
        }
        if let Some(is_public) = self.is_public {
            record.is_public = is_public;
        }
    }
}
