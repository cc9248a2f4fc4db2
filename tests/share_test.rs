//! Integration tests for share tokens.

mod helpers;

use skyvault_core::error::ErrorKind;
use skyvault_service::LinkService;

#[tokio::test]
async fn test_share_lifecycle() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let f2 = app.upload_text(alice.id, "f2.txt", "shared content").await;

    let link = LinkService::new();
    let token = link.generate_token();

    // Enable: the token resolves to the file.
    app.shares
        .set_share(f2.id, true, Some(token.clone()))
        .await
        .unwrap();
    let resolved = app.shares.resolve(&token).await.unwrap().unwrap();
    assert_eq!(resolved.id, f2.id);

    // Resolution is idempotent with no mutation in between.
    assert!(app.shares.resolve(&token).await.unwrap().is_some());

    // Disable: the token goes dark.
    app.shares.set_share(f2.id, false, None).await.unwrap();
    assert!(app.shares.resolve(&token).await.unwrap().is_none());

    // Re-enable with a new token: only the new token resolves.
    let token2 = link.generate_token();
    app.shares
        .set_share(f2.id, true, Some(token2.clone()))
        .await
        .unwrap();
    assert!(app.shares.resolve(&token).await.unwrap().is_none());
    assert_eq!(app.shares.resolve(&token2).await.unwrap().unwrap().id, f2.id);
}

#[tokio::test]
async fn test_set_share_is_strict_on_missing_files() {
    let app = helpers::TestApp::new().await;

    let err = app
        .shares
        .set_share(uuid::Uuid::new_v4(), true, Some("tok".to_string()))
        .await
        .unwrap_err();
    assert!(err.is_kind(ErrorKind::NotFound));

    let err = app
        .shares
        .set_share(uuid::Uuid::new_v4(), false, None)
        .await
        .unwrap_err();
    assert!(err.is_kind(ErrorKind::NotFound));
}

#[tokio::test]
async fn test_trashing_revokes_share_and_restore_does_not_reinstate() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let file = app.upload_text(alice.id, "shared.txt", "data").await;

    let token = LinkService::new().generate_token();
    app.shares
        .set_share(file.id, true, Some(token.clone()))
        .await
        .unwrap();

    app.files.trash(file.id).await.unwrap();

    // Trash clears all share state.
    let trashed = app.files.get_file(file.id).await.unwrap().unwrap();
    assert!(!trashed.is_shared);
    assert!(trashed.share_token.is_none());
    assert!(app.shares.resolve(&token).await.unwrap().is_none());

    // Restore never brings sharing back.
    app.files.restore(file.id).await.unwrap();
    let restored = app.files.get_file(file.id).await.unwrap().unwrap();
    assert!(!restored.is_shared);
    assert!(app.shares.resolve(&token).await.unwrap().is_none());
}

#[tokio::test]
async fn test_cannot_share_a_trashed_file() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_test_user("alice").await;
    let file = app.upload_text(alice.id, "gone.txt", "data").await;
    app.files.trash(file.id).await.unwrap();

    let err = app
        .shares
        .set_share(file.id, true, Some("tok".to_string()))
        .await
        .unwrap_err();
    assert!(err.is_kind(ErrorKind::Conflict));
}

#[tokio::test]
async fn test_resolve_unknown_token_is_none() {
    let app = helpers::TestApp::new().await;
    assert!(app.shares.resolve("no-such-token").await.unwrap().is_none());
}
