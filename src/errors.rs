//! Error types for the Solar 360 estimator service.
//!
//! Estimators fail with a single domain kind, [`ValidationError`]. The HTTP layer wraps it
//! (together with not-found lookups) in [`Error`], which knows how to turn
//! itself into a JSON response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Raised when a required estimator input is missing, blank, or not positive.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid bill amount")]
    InvalidBillAmount,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),
    #[error("invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
    #[error("purchase date {0} is in the future")]
    PurchaseDateInFuture(String),
    #[error("address required")]
    AddressRequired,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Umbrella error for request handlers.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(String),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDto {
    /// Short notice heading, e.g. "Missing Information"
    pub title: String,
    /// Human readable detail
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                tracing::debug!("rejected estimate input: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        title: "Missing Information".to_string(),
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    title: "Not Found".to_string(),
                    error: format!("{} not found", what),
                }),
            )
                .into_response(),
        }
    }
}
