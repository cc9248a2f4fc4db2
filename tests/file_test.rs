//! Integration tests for upload, listing, and the trash lifecycle.

mod helpers;

use skyvault_core::error::ErrorKind;
use skyvault_entity::file::{FileCategory, NewFile};
use skyvault_entity::folder::NewFolder;

#[tokio::test]
async fn test_upload_classifies_and_charges_quota() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let file = app
        .files
        .upload(
            NewFile {
                name: "photo.jpg".to_string(),
                size: 1_000_000,
                mime_type: "image/jpeg".to_string(),
                parent_id: None,
                owner_id: alice.id,
            },
            &[0u8; 16],
        )
        .await
        .unwrap();

    assert_eq!(file.category, FileCategory::Image);
    assert_eq!(file.storage_key, "skyvault/photo.jpg");
    assert!(!file.is_shared);
    assert!(!file.is_trashed);
    assert_eq!(app.storage_used(alice.id).await, 1_000_000);
}

#[tokio::test]
async fn test_upload_never_rejects_on_quota() {
    let app = helpers::TestApp::new().await;
    let mut alice = app.create_test_user("alice").await;
    alice.storage_limit = 10;
    app.identity.update_user(&alice).await.unwrap();

    // Far over the limit; quota is advisory only.
    let file = app.upload_text(alice.id, "big.txt", "0123456789abcdef").await;
    assert_eq!(file.size, 16);
    assert_eq!(app.storage_used(alice.id).await, 16);
}

#[tokio::test]
async fn test_upload_rejects_missing_or_disabled_owner() {
    let app = helpers::TestApp::new().await;
    let mut alice = app.create_test_user("alice").await;

    let err = app
        .files
        .upload(
            NewFile {
                name: "ghost.txt".to_string(),
                size: 1,
                mime_type: "text/plain".to_string(),
                parent_id: None,
                owner_id: uuid::Uuid::new_v4(),
            },
            b"x",
        )
        .await
        .unwrap_err();
    assert!(err.is_kind(ErrorKind::NotFound));

    alice.is_active = false;
    app.identity.update_user(&alice).await.unwrap();

    let err = app
        .files
        .upload(
            NewFile {
                name: "nope.txt".to_string(),
                size: 1,
                mime_type: "text/plain".to_string(),
                parent_id: None,
                owner_id: alice.id,
            },
            b"x",
        )
        .await
        .unwrap_err();
    assert!(err.is_kind(ErrorKind::AccountDisabled));
}

#[tokio::test]
async fn test_listing_filters_owner_parent_and_trash() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let bob = app.create_test_user("bob").await;

    let folder = app
        .folders
        .create_folder(NewFolder {
            name: "Documents".to_string(),
            parent_id: None,
            owner_id: alice.id,
        })
        .await
        .unwrap();

    let top = app.upload_text(alice.id, "top.txt", "a").await;
    let nested = app
        .files
        .upload(
            NewFile {
                name: "nested.txt".to_string(),
                size: 1,
                mime_type: "text/plain".to_string(),
                parent_id: Some(folder.id),
                owner_id: alice.id,
            },
            b"b",
        )
        .await
        .unwrap();
    let trashed = app.upload_text(alice.id, "old.txt", "c").await;
    app.files.trash(trashed.id).await.unwrap();
    app.upload_text(bob.id, "bobs.txt", "d").await;

    let listing = app.files.list(alice.id, None).await.unwrap();
    let names: Vec<&str> = listing.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["top.txt"]);
    assert_eq!(listing[0].id, top.id);

    let nested_listing = app.files.list(alice.id, Some(folder.id)).await.unwrap();
    assert_eq!(nested_listing.len(), 1);
    assert_eq!(nested_listing[0].id, nested.id);

    // Bob's listing never contains Alice's entries.
    let bob_listing = app.files.list(bob.id, None).await.unwrap();
    assert!(bob_listing.iter().all(|f| f.owner_id == bob.id));
}

#[tokio::test]
async fn test_trash_restore_purge_scenario() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let f1 = app
        .files
        .upload(
            NewFile {
                name: "f1.bin".to_string(),
                size: 1_000_000,
                mime_type: "application/octet-stream".to_string(),
                parent_id: None,
                owner_id: alice.id,
            },
            &[1, 2, 3],
        )
        .await
        .unwrap();
    assert_eq!(app.storage_used(alice.id).await, 1_000_000);

    // Trash: listing empties, trash fills, quota unchanged.
    app.files.trash(f1.id).await.unwrap();
    assert!(app.files.list(alice.id, None).await.unwrap().is_empty());
    let trash = app.files.get_trashed(alice.id).await.unwrap();
    assert_eq!(trash.files.len(), 1);
    assert_eq!(trash.files[0].id, f1.id);
    assert_eq!(app.storage_used(alice.id).await, 1_000_000);

    // Purge: quota released, record and content gone.
    app.files.purge(f1.id).await.unwrap();
    assert_eq!(app.storage_used(alice.id).await, 0);
    assert!(app.files.get_trashed(alice.id).await.unwrap().files.is_empty());
    assert!(app.files.get_content(f1.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_trash_and_restore_are_soft_on_missing_files() {
    let app = helpers::TestApp::new().await;

    // Missing files are a no-op success, not an error.
    app.files.trash(uuid::Uuid::new_v4()).await.unwrap();
    app.files.restore(uuid::Uuid::new_v4()).await.unwrap();
    app.files.purge(uuid::Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_restore_clears_trash_state_only() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let file = app.upload_text(alice.id, "doc.txt", "content").await;

    app.files.trash(file.id).await.unwrap();
    app.files.restore(file.id).await.unwrap();

    let restored = app.files.get_file(file.id).await.unwrap().unwrap();
    assert!(!restored.is_trashed);
    assert!(restored.trashed_at.is_none());
    assert_eq!(app.files.list(alice.id, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_trash_only_touches_one_owner() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let bob = app.create_test_user("bob").await;

    let a1 = app.upload_text(alice.id, "a1.txt", "aaaa").await;
    let a2 = app.upload_text(alice.id, "a2.txt", "bbbb").await;
    let keep = app.upload_text(alice.id, "keep.txt", "cc").await;
    let b1 = app.upload_text(bob.id, "b1.txt", "dddd").await;

    app.files.trash(a1.id).await.unwrap();
    app.files.trash(a2.id).await.unwrap();
    app.files.trash(b1.id).await.unwrap();

    let purged = app.files.empty_trash(alice.id).await.unwrap();
    assert_eq!(purged, 2);

    // Alice keeps only the active file's bytes; Bob's trash is intact.
    assert_eq!(app.storage_used(alice.id).await, keep.size);
    assert_eq!(app.files.get_trashed(bob.id).await.unwrap().files.len(), 1);
}

#[tokio::test]
async fn test_get_content_roundtrip() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let file = app.upload_text(alice.id, "notes.txt", "remember this").await;

    let content = app.files.get_content(file.id).await.unwrap().unwrap();
    assert_eq!(content, b"remember this");
}

#[tokio::test]
async fn test_rename_keeps_category_and_storage_key() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;

    let file = app
        .files
        .upload(
            NewFile {
                name: "photo.jpg".to_string(),
                size: 9,
                mime_type: "image/jpeg".to_string(),
                parent_id: None,
                owner_id: alice.id,
            },
            b"123456789",
        )
        .await
        .unwrap();

    let renamed = app.files.rename(file.id, "vacation.jpg").await.unwrap();
    assert_eq!(renamed.name, "vacation.jpg");
    assert_eq!(renamed.category, FileCategory::Image);
    assert_eq!(renamed.storage_key, "skyvault/photo.jpg");
}
