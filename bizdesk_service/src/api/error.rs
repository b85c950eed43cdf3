use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models_bizdesk::response::ErrorResponse;
use models_bizdesk::ValidationError;

/// The tagged failure taxonomy every handler funnels into. The variant, not
/// string inspection, decides the HTTP status; the body is always `{error}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// an identity lookup missed
    #[error("{0} not found")]
    NotFound(&'static str),
    /// a required-field, enumeration or shape violation
    #[error("{0}")]
    Validation(String),
    /// a uniqueness conflict surfaced by the store
    #[error("{0}")]
    Conflict(String),
    /// everything else: store unavailable, unexpected failures
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.0)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Database failures are classified by their constraint codes so schema-level
/// enum/required violations surface as client errors, not opaque 500s
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
            match db_err.code().as_deref() {
                // unique_violation
                Some("23505") => return ApiError::Conflict(db_err.message().to_string()),
                // not_null_violation, check_violation
                Some("23502") | Some("23514") => {
                    return ApiError::Validation(db_err.message().to_string())
                }
                _ => {}
            }
        }
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = ?err, "request failed");
        }
        let status = self.status();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Client").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Client not found");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let response = ApiError::Validation("name is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "name is required");
    }

    #[tokio::test]
    async fn internal_maps_to_500() {
        let response = ApiError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "boom");
    }
}
