//! Roomcast - Main Library
//!
//! Roomcast is a multi-room chat backend built with Rust. Users create
//! public or private rooms, join and leave them, exchange messages, and
//! receive new-message notifications over per-room delivery channels.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Wire types used across the service and API layers
//!   - Room, membership, and message structures
//!   - Delivery event types and pagination envelopes
//!   - The domain error taxonomy
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with REST and SSE handlers
//!   - Room lifecycle, membership policy, and message services
//!   - SQLite persistence via sqlx and real-time broadcasting
//!
//! # Usage
//!
//! ```rust,no_run
//! use roomcast::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app().await?;
//! // Use app with an Axum server
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is thread-safe using `Arc` and `broadcast::Sender`.
//! Persistence goes through a shared `sqlx::SqlitePool`.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
