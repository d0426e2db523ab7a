/**
 * Backend Error Types
 *
 * This module defines the error type used by HTTP handlers and services.
 * It wraps the domain error taxonomy and infrastructure failures, and
 * maps each case to an HTTP status code.
 *
 * # Error Types
 *
 * - `Chat` - domain errors (not found, authorization, validation, conflicts)
 * - `Database` - sqlx failures from the store layer
 *
 * # Status Code Mapping
 *
 * - `NotFound` - 404
 * - `Unauthorized` - 403
 * - `InvalidInput` - 422 (covers duplicate slugs)
 * - `AlreadyMember` / `NotAMember` / `Conflict` - 409
 * - `Database` - 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::ChatError;

/// Backend-specific error type
///
/// Services return this from every fallible operation. Handlers convert
/// it to an HTTP response via `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Domain error from room, membership, or message operations
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// Database error from the store layer
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Chat(err) => match err {
                ChatError::NotFound => StatusCode::NOT_FOUND,
                ChatError::Unauthorized => StatusCode::FORBIDDEN,
                ChatError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                ChatError::AlreadyMember => StatusCode::CONFLICT,
                ChatError::NotAMember => StatusCode::CONFLICT,
                ChatError::Conflict { .. } => StatusCode::CONFLICT,
            },
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message exposed in the response body
    ///
    /// Database failures are not surfaced to clients; they are logged at
    /// conversion time and reported as a generic internal error.
    pub fn message(&self) -> String {
        match self {
            Self::Chat(err) => err.to_string(),
            Self::Database(_) => "Internal server error".to_string(),
        }
    }
}

/// Check whether a sqlx error is a unique constraint violation
///
/// The store surfaces raced inserts this way; services map them onto the
/// contextual domain error (duplicate slug, already a member).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().map(|db| db.kind()),
        Some(sqlx::error::ErrorKind::UniqueViolation)
    )
}
