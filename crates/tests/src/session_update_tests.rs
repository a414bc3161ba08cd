use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use session::{
    FileStorage, MockAuthProvider, SessionStore, StorageBackend, USER_DATA_KEY,
};
use shared_types::{AppErrorKind, AuthUser, UserUpdate};

use crate::common;

#[tokio::test]
async fn update_merges_and_repersists() {
    let (storage, store) = common::ready_store().await;
    store.login(&common::login_req("trainer@college.edu")).await.unwrap();

    let merged = store
        .update_user(UserUpdate {
            name: Some("Sarah T.".into()),
            phone: Some("+1555".into()),
            ..UserUpdate::default()
        })
        .unwrap();

    assert_eq!(merged.name, "Sarah T.");
    assert_eq!(merged.phone.as_deref(), Some("+1555"));
    assert_eq!(merged.email, "trainer@college.edu");

    let cached: AuthUser =
        serde_json::from_str(&storage.get(USER_DATA_KEY).unwrap()).unwrap();
    assert_eq!(cached, merged);
    assert_eq!(store.snapshot().user, Some(merged));
}

#[tokio::test]
async fn update_without_session_fails() {
    let (_storage, store) = common::ready_store().await;

    let err = store
        .update_user(UserUpdate {
            name: Some("Nobody".into()),
            ..UserUpdate::default()
        })
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn updated_identity_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockAuthProvider::with_delay(Duration::ZERO));

    let original = {
        let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
        let store = SessionStore::new(storage, provider.clone());
        store.bootstrap().await;
        store.login(&common::login_req("trainer@college.edu")).await.unwrap();
        store
            .update_user(UserUpdate {
                name: Some("X".into()),
                ..UserUpdate::default()
            })
            .unwrap()
    };

    // Fresh storage handle and store over the same directory — a reload.
    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    let store = SessionStore::new(storage, provider);
    store.bootstrap().await;

    let restored = store.snapshot().user.expect("session survives reload");
    assert_eq!(restored.name, "X");
    assert_eq!(restored, original);
}
