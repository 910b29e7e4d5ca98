// Centralized error handling for the provider and the client

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Content type of every provider response
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Errors a provider request can end with
///
/// The provider answers with a status code only; bodies are always empty.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("user not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status(), [(header::CONTENT_TYPE, JSON_UTF8)]).into_response()
    }
}

/// Errors returned by [`crate::api::client::ApiClient`]
#[derive(Error, Debug)]
pub enum ClientError {
    /// The provider answered 404
    #[error("not found")]
    NotFound,

    /// The provider answered 401
    #[error("unauthorized")]
    Unauthorized,

    /// Transport or decode failure while fetching a single user
    #[error("api unavailable")]
    Unavailable,

    /// Transport or decode failure while listing users, unclassified
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClientError::Unavailable)
    }
}
