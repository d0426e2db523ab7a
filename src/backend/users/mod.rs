//! Users Module
//!
//! Read/write access to the users table. Rows originate from the outside
//! identity provider; this service only resolves them for membership and
//! sender joins.

/// User persistence
pub mod store;
