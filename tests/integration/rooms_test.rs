//! Room lifecycle integration tests

use assert_matches::assert_matches;

use roomcast::backend::error::ApiError;
use roomcast::backend::realtime::broadcast::RoomBroadcasts;
use roomcast::backend::rooms::{service, store};
use roomcast::backend::messages::service as message_service;
use roomcast::backend::messages::store as message_store;
use roomcast::shared::{
    ChatError, CreateRoomRequest, PageParams, Role, SendMessageRequest, Visibility,
};

use crate::common::auth_helpers::create_unique_test_user;
use crate::common::database::TestDatabase;

fn room_request(name: &str, visibility: Visibility) -> CreateRoomRequest {
    CreateRoomRequest {
        name: name.to_string(),
        description: None,
        visibility,
    }
}

#[tokio::test]
async fn test_create_room_admits_creator_as_admin() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;

    let room = service::create_room(db.pool(), creator.id, room_request("General", Visibility::Public))
        .await
        .unwrap();

    assert_eq!(room.name, "General");
    assert_eq!(room.slug, "general");
    assert_eq!(room.created_by, creator.id);

    let membership = store::get_membership(db.pool(), room.id, creator.id)
        .await
        .unwrap()
        .expect("creator should be a member");
    assert_eq!(membership.role, Role::Admin);

    let members = service::list_members(db.pool(), creator.id, room.id)
        .await
        .unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user.id, creator.id);
}

#[tokio::test]
async fn test_create_room_trims_name_and_keeps_description() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;

    let request = CreateRoomRequest {
        name: "  Rust Study Group  ".to_string(),
        description: Some("Weekly readings".to_string()),
        visibility: Visibility::Private,
    };
    let room = service::create_room(db.pool(), creator.id, request).await.unwrap();

    assert_eq!(room.name, "Rust Study Group");
    assert_eq!(room.slug, "rust-study-group");
    assert_eq!(room.description.as_deref(), Some("Weekly readings"));
}

#[tokio::test]
async fn test_create_room_rejects_duplicate_slug() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;

    service::create_room(db.pool(), creator.id, room_request("General", Visibility::Public))
        .await
        .unwrap();

    // Different spelling, same slug
    let err = service::create_room(db.pool(), creator.id, room_request("General!", Visibility::Public))
        .await
        .unwrap_err();
    assert_matches!(err, ApiError::Chat(ChatError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_create_room_rejects_unusable_names() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;

    let empty = service::create_room(db.pool(), creator.id, room_request("   ", Visibility::Public))
        .await
        .unwrap_err();
    assert_matches!(empty, ApiError::Chat(ChatError::InvalidInput { .. }));

    let symbols = service::create_room(db.pool(), creator.id, room_request("!!!", Visibility::Public))
        .await
        .unwrap_err();
    assert_matches!(symbols, ApiError::Chat(ChatError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_get_room_hides_private_rooms_from_non_members() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;
    let outsider = create_unique_test_user(db.pool()).await;

    let room = service::create_room(db.pool(), creator.id, room_request("Secret", Visibility::Private))
        .await
        .unwrap();

    let err = service::get_room(db.pool(), outsider.id, room.id).await.unwrap_err();
    assert_matches!(err, ApiError::Chat(ChatError::Unauthorized));

    let visible = service::get_room(db.pool(), creator.id, room.id).await.unwrap();
    assert_eq!(visible.id, room.id);
}

#[tokio::test]
async fn test_rooms_are_reachable_by_slug() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;

    let room = service::create_room(db.pool(), creator.id, room_request("Rust Study Group", Visibility::Public))
        .await
        .unwrap();

    let found = store::get_room_by_slug(db.pool(), "rust-study-group")
        .await
        .unwrap()
        .expect("room should resolve by slug");
    assert_eq!(found.id, room.id);

    assert!(store::get_room_by_slug(db.pool(), "no-such-room")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_get_room_unknown_id_is_not_found() {
    let db = TestDatabase::new().await;
    let user = create_unique_test_user(db.pool()).await;

    let err = service::get_room(db.pool(), user.id, uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert_matches!(err, ApiError::Chat(ChatError::NotFound));
}

#[tokio::test]
async fn test_delete_room_requires_the_creator() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;
    let other = create_unique_test_user(db.pool()).await;

    let room = service::create_room(db.pool(), creator.id, room_request("General", Visibility::Public))
        .await
        .unwrap();

    // Even another admin cannot delete; only the creator can
    let admin = roomcast::shared::RoomMember {
        room_id: room.id,
        user_id: other.id,
        role: Role::Admin,
        joined_at: chrono::Utc::now(),
        last_read_at: None,
    };
    let mut tx = db.pool().begin().await.unwrap();
    store::insert_member(&mut tx, &admin).await.unwrap();
    tx.commit().await.unwrap();

    let err = service::delete_room(db.pool(), other.id, room.id).await.unwrap_err();
    assert_matches!(err, ApiError::Chat(ChatError::Unauthorized));

    service::delete_room(db.pool(), creator.id, room.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_room_cascades_members_and_messages() {
    let db = TestDatabase::new().await;
    let broadcasts = RoomBroadcasts::new();
    let creator = create_unique_test_user(db.pool()).await;
    let member = create_unique_test_user(db.pool()).await;

    let room = service::create_room(db.pool(), creator.id, room_request("General", Visibility::Public))
        .await
        .unwrap();
    service::join_room(db.pool(), member.id, room.id).await.unwrap();

    let request = SendMessageRequest {
        content: "hello".to_string(),
        message_type: None,
        metadata: None,
    };
    message_service::send_message(db.pool(), &broadcasts, room.id, member.id, request)
        .await
        .unwrap();

    service::delete_room(db.pool(), creator.id, room.id).await.unwrap();

    let err = service::get_room(db.pool(), creator.id, room.id).await.unwrap_err();
    assert_matches!(err, ApiError::Chat(ChatError::NotFound));

    assert!(!store::is_member(db.pool(), room.id, member.id).await.unwrap());
    assert_eq!(message_store::count_messages(db.pool(), room.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_rooms_public_directory_excludes_private() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;
    let outsider = create_unique_test_user(db.pool()).await;

    let public = service::create_room(db.pool(), creator.id, room_request("Town Hall", Visibility::Public))
        .await
        .unwrap();
    service::create_room(db.pool(), creator.id, room_request("Secret", Visibility::Private))
        .await
        .unwrap();

    let page = service::list_rooms(db.pool(), outsider.id, PageParams::default(), false)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, public.id);
}

#[tokio::test]
async fn test_list_rooms_mine_includes_private_memberships() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;

    service::create_room(db.pool(), creator.id, room_request("Town Hall", Visibility::Public))
        .await
        .unwrap();
    service::create_room(db.pool(), creator.id, room_request("Secret", Visibility::Private))
        .await
        .unwrap();

    let page = service::list_rooms(db.pool(), creator.id, PageParams::default(), true)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn test_list_rooms_newest_first() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;

    let first = service::create_room(db.pool(), creator.id, room_request("First", Visibility::Public))
        .await
        .unwrap();
    let second = service::create_room(db.pool(), creator.id, room_request("Second", Visibility::Public))
        .await
        .unwrap();

    let page = service::list_rooms(db.pool(), creator.id, PageParams::default(), false)
        .await
        .unwrap();
    let ids: Vec<_> = page.items.iter().map(|room| room.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}
