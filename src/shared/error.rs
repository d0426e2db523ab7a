//! Domain Error Taxonomy
//!
//! This module defines the error cases the chat domain can produce. They
//! are transport-agnostic; the backend error layer maps them to HTTP
//! status codes.
//!
//! # Error Categories
//!
//! - `NotFound` - the referenced room does not exist
//! - `Unauthorized` - the caller is not allowed to perform the operation
//! - `InvalidInput` - a field failed validation (including duplicate slugs)
//! - `AlreadyMember` / `NotAMember` - membership state conflicts
//! - `Conflict` - the operation contradicts current state
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Errors produced by room, membership, and message operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The referenced room does not exist
    #[error("Room not found")]
    NotFound,

    /// The caller is not allowed to perform this operation
    #[error("Not authorized to perform this action")]
    Unauthorized,

    /// A field failed validation
    #[error("Invalid input in field '{field}': {message}")]
    InvalidInput {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The user is already a member of the room
    #[error("Already a member of this room")]
    AlreadyMember,

    /// The user is not a member of the room
    #[error("Not a member of this room")]
    NotAMember,

    /// The operation contradicts the room's current state
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },
}

impl ChatError {
    /// Create a new validation error
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}
