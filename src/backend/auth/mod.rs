//! Authentication Module
//!
//! Bearer token validation for the HTTP surface. Identity management is
//! out of scope; this module only verifies tokens minted by the identity
//! provider and resolves them to a known user.

/// JWT token creation and verification
pub mod sessions;

pub use sessions::{create_token, get_user_id_from_token, verify_token, Claims};
