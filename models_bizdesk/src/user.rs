use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The acting user attached to every authenticated request by the middleware.
/// Identity extraction happens upstream; the id is opaque to this service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: String,
}

impl UserContext {
    /// the actor id to stamp onto created records, if one was forwarded
    pub fn actor(&self) -> Option<String> {
        if self.user_id.is_empty() {
            None
        } else {
            Some(self.user_id.clone())
        }
    }
}

/// A user reference resolved to its profile projection
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
