//! Membership Policy
//!
//! Pure authorization predicates over rooms and memberships. No I/O
//! happens here; callers load the room and the caller's membership and
//! ask these functions what is allowed. Services map a `false` onto the
//! appropriate domain error.
use uuid::Uuid;

use crate::shared::{Role, Room, RoomMember, Visibility};

/// Whether a user may view a room and its contents
///
/// Public rooms are viewable by any authenticated user; private rooms
/// only by members.
pub fn can_view(room: &Room, membership: Option<&RoomMember>) -> bool {
    match room.visibility {
        Visibility::Public => true,
        Visibility::Private => membership.is_some(),
    }
}

/// Whether a user may join a room
///
/// Existing members cannot re-join. Private rooms are not joinable
/// without an invitation, and there is no invitation surface.
pub fn can_join(room: &Room, membership: Option<&RoomMember>) -> bool {
    if membership.is_some() {
        return false;
    }
    room.visibility == Visibility::Public
}

/// Whether a user may leave a room
///
/// The creator can never leave their own room. `created_by` governs,
/// not role: a creator downgraded to a plain member still cannot leave.
pub fn can_leave(user_id: Uuid, room: &Room, membership: Option<&RoomMember>) -> bool {
    membership.is_some() && room.created_by != user_id
}

/// Whether a member may manage the room (admins and moderators)
pub fn can_manage(membership: Option<&RoomMember>) -> bool {
    matches!(
        membership.map(|m| m.role),
        Some(Role::Admin) | Some(Role::Moderator)
    )
}

/// Whether a user may delete a room
///
/// Creator only. Admins who did not create the room cannot delete it.
pub fn can_delete(user_id: Uuid, room: &Room) -> bool {
    room.created_by == user_id
}
