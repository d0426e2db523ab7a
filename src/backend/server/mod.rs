//! Server Module
//!
//! Server-side wiring: configuration loading, the shared application
//! state, and app assembly.
//!
//! - **`config`** - environment configuration and database setup
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - app creation

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;
