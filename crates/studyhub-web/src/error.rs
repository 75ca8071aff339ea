//! Mapping of StudyHub errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use studyhub_common::StudyhubError;

pub const TEST_NOT_FOUND_BODY: &str = "Error: Test not found.";

/// Handler error; wraps [`StudyhubError`] so `?` works inside handlers.
#[derive(Debug)]
pub struct AppError(pub StudyhubError);

impl<E> From<E> for AppError
where
    E: Into<StudyhubError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            StudyhubError::TestNotFound(id) => {
                tracing::debug!(test_id = %id, "unknown test id");
                (StatusCode::NOT_FOUND, TEST_NOT_FOUND_BODY).into_response()
            }
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
