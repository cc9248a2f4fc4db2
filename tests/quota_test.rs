//! Integration tests for quota accounting.

mod helpers;

use uuid::Uuid;

#[tokio::test]
async fn test_upload_then_purge_returns_to_baseline() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let before = app.storage_used(alice.id).await;
    let file = app.upload_text(alice.id, "temp.txt", "some bytes here").await;
    assert_eq!(app.storage_used(alice.id).await, before + file.size);

    app.files.purge(file.id).await.unwrap();
    assert_eq!(app.storage_used(alice.id).await, before);
}

#[tokio::test]
async fn test_adjust_usage_missing_user_is_a_noop() {
    let app = helpers::TestApp::new().await;

    // Stale references must never fail cleanup paths.
    app.quota.adjust_usage(Uuid::new_v4(), 123).await.unwrap();
}

#[tokio::test]
async fn test_adjust_usage_does_not_clamp_negative() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    app.quota.adjust_usage(alice.id, -500).await.unwrap();

    // The negative balance is written back as-is (bug signal, not floored).
    assert_eq!(app.storage_used(alice.id).await, -500);
}

#[tokio::test]
async fn test_concurrent_adjustments_sum_exactly() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let quota = app.quota.clone();
        let user_id = alice.id;
        handles.push(tokio::spawn(async move {
            quota.adjust_usage(user_id, 10).await
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked").expect("adjustment failed");
    }

    // Per-user serialization means no update is ever lost.
    assert_eq!(app.storage_used(alice.id).await, 200);
}

#[tokio::test]
async fn test_trashed_files_still_count_against_quota() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let file = app.upload_text(alice.id, "kept.txt", "0123456789").await;

    app.files.trash(file.id).await.unwrap();
    assert_eq!(app.storage_used(alice.id).await, 10);
}
