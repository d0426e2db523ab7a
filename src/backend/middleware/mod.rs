//! Middleware Module
//!
//! This module contains request-processing helpers for the backend
//! server, currently the authentication extractor used by protected
//! routes.

pub mod auth;

pub use auth::CurrentUser;
