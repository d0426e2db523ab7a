//! User Profile
//!
//! Identity is managed outside this service; a profile is the display
//! information joined onto members and message senders.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display profile for a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
}
