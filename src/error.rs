//! Error types for the travel server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::multipart::{MultipartError, MultipartRejection};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{error}: {details}")]
    BadRequest { error: String, details: String },

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A storage failure tagged with the action the client attempted
    #[error("{action}: {source}")]
    Storage {
        action: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is the storage engine rejecting a duplicate key
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AppError::Database(sqlx::Error::Database(db))
            | AppError::Storage { source: sqlx::Error::Database(db), .. } => db.is_unique_violation(),
            _ => false,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying storage or parser message, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Message reported by the storage engine, verbatim when it comes from the database
fn storage_details(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string(), None)
            }
            AppError::BadRequest { error, details } => {
                (StatusCode::BAD_REQUEST, error, Some(details))
            }
            AppError::Authorization(msg) => (StatusCode::FORBIDDEN, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Storage { action, source } => {
                tracing::error!("{}: {:?}", action, source);
                (StatusCode::BAD_REQUEST, action, Some(storage_details(&source)))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "Database error".to_string(),
                    Some(storage_details(&e)),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            error: "Invalid request body".to_string(),
            details: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            error: "Invalid path parameter".to_string(),
            details: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest {
            error: "Invalid multipart body".to_string(),
            details: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest {
            error: "Invalid multipart body".to_string(),
            details: err.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Tags storage failures with the action reported to the client
pub trait StorageContext<T> {
    fn storage_context(self, action: &str) -> AppResult<T>;
}

impl<T> StorageContext<T> for AppResult<T> {
    fn storage_context(self, action: &str) -> AppResult<T> {
        self.map_err(|err| match err {
            AppError::Database(source) => AppError::Storage {
                action: action.to_string(),
                source,
            },
            other => other,
        })
    }
}
