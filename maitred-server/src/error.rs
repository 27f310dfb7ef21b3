use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use maitred_core::Error;

/// Transport wrapper turning structured errors into HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(anyhow::Error::new(e))
    }
}

impl From<maitred_store::StoreError> for ApiError {
    fn from(e: maitred_store::StoreError) -> Self {
        Self(anyhow::Error::new(Error::from(e)))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Preserve the structured fields if a domain error is anywhere in
        // the chain; anything else becomes the generic 500 shape.
        let err = match self.0.chain().find_map(|e| e.downcast_ref::<Error>()) {
            Some(domain) => domain.clone(),
            None => Error::general_error(self.0.to_string()),
        };

        if err.code() >= 500 {
            tracing::error!(error = %err, "request failed");
        }

        let safe = err.sanitize_for_client();
        let status =
            StatusCode::from_u16(safe.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(safe.to_json())).into_response()
    }
}
