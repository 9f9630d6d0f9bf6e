//! Errors rendered as API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{infrastructure::dto::http::ApiResponse, usecase::BatchError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request password does not match the configured one
    #[error("Wrong password")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<BatchError> for ApiError {
    fn from(e: BatchError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::empty(status.as_u16(), self.to_string());
        (status, Json(body)).into_response()
    }
}
