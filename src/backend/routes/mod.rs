//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! - **`router`** - router assembly (layers, health, fallback)
//! - **`api_routes`** - the `/api` endpoint table

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
