//! Backend Module
//!
//! All server-side code for the roomcast service: an Axum HTTP server
//! with REST endpoints for rooms, membership, and messages, plus an SSE
//! delivery stream per room.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`rooms`** - room lifecycle, membership policy, and persistence
//! - **`messages`** - message persistence and send/list operations
//! - **`realtime`** - per-room broadcast channels and SSE subscriptions
//! - **`auth`** - JWT session tokens
//! - **`users`** - user lookup
//! - **`middleware`** - request identity extraction
//! - **`error`** - API error type and HTTP mapping
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the SQLite pool and the room
//! broadcast registry. Both are reference-counted handles, so the state
//! clones cheaply into each request.
//!
//! # Error Handling
//!
//! Services return `Result<_, ApiError>`; the error carries its HTTP
//! status and serializes to a JSON body in one place.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Room lifecycle and membership
pub mod rooms;

/// Message persistence and operations
pub mod messages;

/// Realtime delivery system
pub mod realtime;

/// Authentication tokens
pub mod auth;

/// User lookup
pub mod users;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState};
