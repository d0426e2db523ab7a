//! Realtime delivery integration tests

use roomcast::backend::realtime::broadcast::RoomBroadcasts;
use roomcast::backend::realtime::notifier;
use roomcast::backend::messages::service as message_service;
use roomcast::backend::rooms::service as room_service;
use roomcast::shared::{CreateRoomRequest, SendMessageRequest, Visibility};

use crate::common::auth_helpers::create_unique_test_user;
use crate::common::database::TestDatabase;

fn room_request(name: &str, visibility: Visibility) -> CreateRoomRequest {
    CreateRoomRequest {
        name: name.to_string(),
        description: None,
        visibility,
    }
}

fn text_message(content: &str) -> SendMessageRequest {
    SendMessageRequest {
        content: content.to_string(),
        message_type: None,
        metadata: None,
    }
}

#[tokio::test]
async fn test_subscriber_receives_sent_message() {
    let db = TestDatabase::new().await;
    let broadcasts = RoomBroadcasts::new();
    let sender = create_unique_test_user(db.pool()).await;

    let room = room_service::create_room(db.pool(), sender.id, room_request("General", Visibility::Public))
        .await
        .unwrap();

    let mut rx = broadcasts.sender(room.id).subscribe();

    let sent = message_service::send_message(db.pool(), &broadcasts, room.id, sender.id, text_message("hello"))
        .await
        .unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.channel, format!("room.{}", room.id));
    assert_eq!(event.event, "message.sent");
    assert_eq!(event.payload["id"], sent.id.to_string());
    assert_eq!(event.payload["content"], "hello");
    assert_eq!(event.payload["room_id"], room.id.to_string());
}

#[tokio::test]
async fn test_send_without_subscribers_still_succeeds() {
    let db = TestDatabase::new().await;
    let broadcasts = RoomBroadcasts::new();
    let sender = create_unique_test_user(db.pool()).await;

    let room = room_service::create_room(db.pool(), sender.id, room_request("General", Visibility::Public))
        .await
        .unwrap();

    // Nobody is listening; the send must not fail
    let sent = message_service::send_message(db.pool(), &broadcasts, room.id, sender.id, text_message("hello"))
        .await
        .unwrap();
    assert_eq!(sent.content, "hello");
}

#[tokio::test]
async fn test_delivery_is_scoped_to_the_room() {
    let db = TestDatabase::new().await;
    let broadcasts = RoomBroadcasts::new();
    let sender = create_unique_test_user(db.pool()).await;

    let room_a = room_service::create_room(db.pool(), sender.id, room_request("Alpha", Visibility::Public))
        .await
        .unwrap();
    let room_b = room_service::create_room(db.pool(), sender.id, room_request("Beta", Visibility::Public))
        .await
        .unwrap();

    let mut rx_a = broadcasts.sender(room_a.id).subscribe();

    message_service::send_message(db.pool(), &broadcasts, room_b.id, sender.id, text_message("to beta"))
        .await
        .unwrap();

    assert!(rx_a.try_recv().is_err());
}

#[tokio::test]
async fn test_subscribe_authorization_requires_membership() {
    let db = TestDatabase::new().await;
    let creator = create_unique_test_user(db.pool()).await;
    let outsider = create_unique_test_user(db.pool()).await;

    // Public visibility is enough to join, but not to listen
    let room = room_service::create_room(db.pool(), creator.id, room_request("General", Visibility::Public))
        .await
        .unwrap();

    assert!(notifier::authorize_subscribe(db.pool(), room.id, creator.id)
        .await
        .unwrap());
    assert!(!notifier::authorize_subscribe(db.pool(), room.id, outsider.id)
        .await
        .unwrap());

    room_service::join_room(db.pool(), outsider.id, room.id).await.unwrap();
    assert!(notifier::authorize_subscribe(db.pool(), room.id, outsider.id)
        .await
        .unwrap());
}
