use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorDetail;
use crate::services::signup_service::DirectoryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(DirectoryError::NotFound | DirectoryError::NotEnrolled) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Directory(DirectoryError::MissingEmail) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
