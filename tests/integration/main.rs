//! Integration test suite
//!
//! Exercises the services against a real in-memory SQLite database, and
//! the HTTP surface through an in-process test server.

#[path = "../common/mod.rs"]
mod common;

mod realtime_test;
mod rooms_test;
