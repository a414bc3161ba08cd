use std::sync::Arc;

use app::{evaluate_path, AppContext, RouteDecision};
use pretty_assertions::assert_eq;
use session::{MemoryStorage, MockAuthProvider, StorageBackend, AUTH_TOKEN_KEY, USER_DATA_KEY};
use shared_types::{AppConfig, GuardSettings, UserRole, UserStatus};

use crate::common;

fn settings() -> GuardSettings {
    GuardSettings::default()
}

#[tokio::test]
async fn pre_bootstrap_session_defers_every_destination() {
    let (_storage, store) = common::mock_store();

    let snapshot = store.snapshot();
    for path in ["dashboard", "colleges", "groups"] {
        assert_eq!(
            evaluate_path(&snapshot, path, &settings()),
            Some(RouteDecision::Loading),
            "{path}"
        );
    }
}

#[tokio::test]
async fn anonymous_session_is_sent_to_login() {
    let (_storage, store) = common::ready_store().await;

    let snapshot = store.snapshot();
    for path in ["dashboard", "colleges", "my-courses"] {
        assert_eq!(
            evaluate_path(&snapshot, path, &settings()),
            Some(RouteDecision::RedirectLogin),
            "{path}"
        );
    }
}

#[tokio::test]
async fn student_navigation_matrix() {
    let (_storage, store) = common::ready_store().await;
    store.login(&common::login_req("alice@college.edu")).await.unwrap();
    let snapshot = store.snapshot();

    let expected = [
        ("dashboard", RouteDecision::Authorized),
        ("my-courses", RouteDecision::Authorized),
        ("groups", RouteDecision::Authorized),
        ("colleges", RouteDecision::RedirectUnauthorized),
        ("users", RouteDecision::RedirectUnauthorized),
        ("settings", RouteDecision::Authorized),
    ];
    for (path, decision) in expected {
        assert_eq!(evaluate_path(&snapshot, path, &settings()), Some(decision), "{path}");
    }
}

#[tokio::test]
async fn trainer_and_staff_matrices() {
    let (_storage, store) = common::ready_store().await;
    store.login(&common::login_req("trainer@college.edu")).await.unwrap();
    let trainer = store.snapshot();
    assert_eq!(
        evaluate_path(&trainer, "assignments", &settings()),
        Some(RouteDecision::Authorized)
    );
    assert_eq!(
        evaluate_path(&trainer, "my-courses", &settings()),
        Some(RouteDecision::RedirectUnauthorized)
    );

    store.logout();
    store.login(&common::login_req("staff@college.edu")).await.unwrap();
    let staff = store.snapshot();
    assert_eq!(
        evaluate_path(&staff, "groups", &settings()),
        Some(RouteDecision::Authorized)
    );
    assert_eq!(
        evaluate_path(&staff, "colleges", &settings()),
        Some(RouteDecision::RedirectUnauthorized)
    );
}

#[tokio::test]
async fn super_admin_reaches_the_tenant_console() {
    let (_storage, store) = common::ready_store().await;
    store.login(&common::login_req("super@platform.io")).await.unwrap();

    assert_eq!(
        evaluate_path(&store.snapshot(), "colleges", &settings()),
        Some(RouteDecision::Authorized)
    );
}

#[tokio::test]
async fn logout_revokes_access_immediately() {
    let (_storage, store) = common::ready_store().await;
    store.login(&common::login_req("admin@college.edu")).await.unwrap();
    assert_eq!(
        evaluate_path(&store.snapshot(), "users", &settings()),
        Some(RouteDecision::Authorized)
    );

    store.logout();

    assert_eq!(
        evaluate_path(&store.snapshot(), "users", &settings()),
        Some(RouteDecision::RedirectLogin)
    );
}

#[tokio::test]
async fn suspended_identity_is_blocked_even_with_matching_role() {
    let storage = Arc::new(MemoryStorage::new());
    let user = common::sample_user(UserRole::Admin, UserStatus::Inactive);
    storage.set(AUTH_TOKEN_KEY, "tok").unwrap();
    storage
        .set(USER_DATA_KEY, &serde_json::to_string(&user).unwrap())
        .unwrap();
    let store = common::store_on(storage);
    store.bootstrap().await;

    let snapshot = store.snapshot();
    assert!(snapshot.is_authenticated());
    assert_eq!(
        evaluate_path(&snapshot, "users", &settings()),
        Some(RouteDecision::RedirectUnauthorized)
    );

    let relaxed = GuardSettings {
        require_active_status: false,
    };
    assert_eq!(
        evaluate_path(&snapshot, "users", &relaxed),
        Some(RouteDecision::Authorized)
    );
}

#[tokio::test]
async fn context_init_restores_session_and_carries_policy() {
    let storage = Arc::new(MemoryStorage::new());
    let user = common::sample_user(UserRole::Student, UserStatus::Active);
    storage.set(AUTH_TOKEN_KEY, "tok").unwrap();
    storage
        .set(USER_DATA_KEY, &serde_json::to_string(&user).unwrap())
        .unwrap();

    let ctx = AppContext::init(
        storage,
        Arc::new(MockAuthProvider::with_delay(std::time::Duration::ZERO)),
        AppConfig::default(),
    )
    .await
    .unwrap();

    let snapshot = ctx.session.snapshot();
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.user, Some(user));
    assert_eq!(
        evaluate_path(&snapshot, "my-courses", &ctx.config.guard),
        Some(RouteDecision::Authorized)
    );
}
