use chrono::{Duration, Utc};

use paralex::application::ports::SessionStore;
use paralex::domain::ChatMessage;
use paralex::infrastructure::session::InMemorySessionStore;

#[tokio::test]
async fn given_unknown_id_when_getting_then_none_is_returned() {
    let store = InMemorySessionStore::default();
    assert!(store.get("missing").await.is_none());
}

#[tokio::test]
async fn given_new_id_when_upserting_then_session_is_created_with_messages() {
    let store = InMemorySessionStore::default();
    let messages = vec![ChatMessage::user("hello")];

    let session = store.upsert("s1", messages).await;

    assert_eq!(session.id, "s1");
    assert_eq!(session.messages.len(), 1);
    assert!(store.get("s1").await.is_some());
}

#[tokio::test]
async fn given_existing_session_when_upserting_then_created_at_is_preserved() {
    let store = InMemorySessionStore::default();

    let first = store.upsert("s1", vec![ChatMessage::user("one")]).await;
    let second = store
        .upsert(
            "s1",
            vec![ChatMessage::user("one"), ChatMessage::assistant("two")],
        )
        .await;

    assert_eq!(first.created_at, second.created_at);
    assert_eq!(second.messages.len(), 2);
}

#[tokio::test]
async fn given_aged_session_when_sweeping_then_it_is_evicted() {
    let store = InMemorySessionStore::new(90);
    store.upsert("old", vec![ChatMessage::user("hi")]).await;

    let evicted = store.sweep_expired(Utc::now() + Duration::days(91)).await;

    assert_eq!(evicted, 1);
    assert!(store.get("old").await.is_none());
}

#[tokio::test]
async fn given_fresh_session_when_sweeping_then_it_survives() {
    let store = InMemorySessionStore::new(90);
    store.upsert("fresh", vec![ChatMessage::user("hi")]).await;

    let evicted = store.sweep_expired(Utc::now() + Duration::days(30)).await;

    assert_eq!(evicted, 0);
    assert!(store.get("fresh").await.is_some());
}
