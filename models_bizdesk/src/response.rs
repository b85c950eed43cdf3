use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The uniform failure envelope: every error path serializes to `{error}`
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    /// Message explaining the failure
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

/// Envelope for deletes and other acknowledgement-only responses
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
