//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the service layer and the HTTP API surface. All types are designed for
//! serialization and transmission over HTTP.

/// Room, visibility, role, and membership types
pub mod room;

/// Message data structure
pub mod message;

/// Delivery event types
pub mod event;

/// Domain error taxonomy
pub mod error;

/// User profile for member and sender joins
pub mod user;

/// Pagination parameters and envelopes
pub mod pagination;

/// Re-export commonly used types for convenience
pub use error::ChatError;
pub use event::RoomEvent;
pub use message::{Message, SendMessageRequest};
pub use pagination::{Page, PageParams, PageRequest};
pub use room::{CreateRoomRequest, Role, Room, RoomMember, RoomMemberProfile, Visibility};
pub use user::UserProfile;
