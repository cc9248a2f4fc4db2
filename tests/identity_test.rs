//! Integration tests for registration and authentication.

mod helpers;

use skyvault_core::error::ErrorKind;
use skyvault_entity::user::{NewUser, UserPlan, UserRole};

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = helpers::TestApp::new().await;

    let alice = app.create_test_user("alice").await;

    let err = app
        .identity
        .register(NewUser {
            username: "alice".to_string(),
            secret: "other-secret".to_string(),
            role: UserRole::User,
            plan: UserPlan::Free,
            storage_limit: None,
        })
        .await
        .unwrap_err();

    assert!(err.is_kind(ErrorKind::Conflict));

    // The first registration is unaffected.
    let reloaded = app
        .identity
        .find_by_id(alice.id)
        .await
        .unwrap()
        .expect("alice still exists");
    assert_eq!(reloaded.secret, "password123");
}

#[tokio::test]
async fn test_authenticate_success() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let user = app
        .identity
        .authenticate("alice", "password123")
        .await
        .unwrap()
        .expect("credentials match");
    assert_eq!(user.id, alice.id);
}

#[tokio::test]
async fn test_authenticate_wrong_secret_is_no_match() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("alice").await;

    // Wrong secret and unknown user are both "no match", not errors.
    assert!(app
        .identity
        .authenticate("alice", "wrong")
        .await
        .unwrap()
        .is_none());
    assert!(app
        .identity
        .authenticate("nobody", "password123")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_authenticate_disabled_account_is_distinct_error() {
    let app = helpers::TestApp::new().await;
    let mut alice = app.create_test_user("alice").await;

    alice.is_active = false;
    app.identity.update_user(&alice).await.unwrap();

    let err = app
        .identity
        .authenticate("alice", "password123")
        .await
        .unwrap_err();
    assert!(err.is_kind(ErrorKind::AccountDisabled));

    // Wrong secret on the disabled account still reads as "no match".
    assert!(app
        .identity
        .authenticate("alice", "wrong")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_seed_admin_is_idempotent() {
    let app = helpers::TestApp::new().await;

    let first = app.identity.seed_admin("s3cret").await.unwrap();
    assert!(first.role.is_admin());

    let second = app.identity.seed_admin("different").await.unwrap();
    assert_eq!(first.id, second.id);
    // The existing account is untouched.
    assert_eq!(second.secret, "s3cret");

    assert_eq!(app.identity.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_user_does_not_cascade_files() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let file = app.upload_text(alice.id, "keep.txt", "still here").await;

    app.identity.delete_user("alice").await.unwrap();

    assert!(app.identity.find_by_id(alice.id).await.unwrap().is_none());
    // The file record remains; cascade is deliberately not performed.
    assert!(app.files.get_file(file.id).await.unwrap().is_some());
}
