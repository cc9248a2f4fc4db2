//! Integration tests for admin statistics.

mod helpers;

#[tokio::test]
async fn test_empty_system() {
    let app = helpers::TestApp::new().await;

    let stats = app.stats.system_stats().await.unwrap();
    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.total_storage, 0);
}

#[tokio::test]
async fn test_counts_and_total_storage() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let bob = app.create_test_user("bob").await;

    app.upload_text(alice.id, "a.txt", "12345").await;
    app.upload_text(bob.id, "b.txt", "1234567890").await;
    let trashed = app.upload_text(bob.id, "c.txt", "123").await;
    app.files.trash(trashed.id).await.unwrap();

    let stats = app.stats.system_stats().await.unwrap();
    assert_eq!(stats.total_users, 2);
    // Trashed files still exist and still count.
    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.total_storage, 18);

    let b = stats.breakdown;
    assert_eq!(
        b.images + b.videos + b.documents + b.audio + b.archives + b.other,
        stats.total_files
    );
}

#[tokio::test]
async fn test_purge_shrinks_totals() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let file = app.upload_text(alice.id, "a.txt", "12345").await;

    app.files.purge(file.id).await.unwrap();

    let stats = app.stats.system_stats().await.unwrap();
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.total_storage, 0);
}
