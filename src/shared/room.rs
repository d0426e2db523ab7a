//! Room and Membership Types
//!
//! Core data structures for rooms and room membership. Rooms are either
//! public or private; memberships carry a role and a per-member read
//! cursor.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who can see and join a room without an invitation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible and joinable by any authenticated user
    Public,
    /// Visible and usable by members only
    Private,
}

impl Visibility {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    /// Parse the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }
}

/// A member's role within a room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control over the room
    Admin,
    /// Can manage the room but not delete it
    Moderator,
    /// Regular participant
    Member,
}

impl Role {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Member => "member",
        }
    }

    /// Parse the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            "member" => Some(Role::Member),
            _ => None,
        }
    }
}

/// A chat room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// URL-safe identifier derived from the name, unique across all rooms
    pub slug: String,
    pub visibility: Visibility,
    /// The creating user; immutable for the life of the room
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's membership in a room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomMember {
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
    /// Read cursor; `None` until the member first reads the room
    pub last_read_at: Option<DateTime<Utc>>,
}

/// A room member joined with their display profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomMemberProfile {
    pub user: crate::shared::user::UserProfile,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
    pub last_read_at: Option<DateTime<Utc>>,
}

/// Request to create a new room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub description: Option<String>,
    pub visibility: Visibility,
}
