//! Realtime Delivery Module
//!
//! Post-commit message delivery over per-room broadcast channels,
//! exposed to clients as a Server-Sent Events stream.
//!
//! - **`broadcast`** - per-room channel registry
//! - **`notifier`** - channel naming, subscribe authorization, publish
//! - **`subscription`** - SSE handler

/// Per-room broadcast channels
pub mod broadcast;

/// Delivery notifier
pub mod notifier;

/// SSE subscription handler
pub mod subscription;

pub use broadcast::RoomBroadcasts;
