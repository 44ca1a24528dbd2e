//! Integration tests for the anonymous likes counter.

use axum::http::StatusCode;
use futures::future::join_all;

use crate::helpers::TestApp;

async fn seeded() -> (TestApp, String) {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let venue_id = app.create_venue(&owner, "Lviv Handmade Chocolate").await;
    let catalog_id = app.create_catalog(&owner, venue_id, "Sweets").await;
    let item_id = app
        .create_item(&owner, venue_id, catalog_id, "Dark truffle")
        .await;
    let path = format!("/api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}");
    (app, path)
}

#[tokio::test]
async fn test_unlike_floors_at_zero() {
    let (app, path) = seeded().await;

    let unlike = app
        .request("PUT", &format!("{path}/unlike"), None, None)
        .await;
    assert_eq!(unlike.status, StatusCode::OK);
    assert_eq!(unlike.body["data"]["likes_count"], 0);

    let like = app.request("PUT", &format!("{path}/like"), None, None).await;
    assert_eq!(like.body["data"]["likes_count"], 1);

    let unlike = app
        .request("PUT", &format!("{path}/unlike"), None, None)
        .await;
    assert_eq!(unlike.body["data"]["likes_count"], 0);
}

#[tokio::test]
async fn test_unknown_action_is_bad_request() {
    let (app, path) = seeded().await;

    let response = app
        .request("PUT", &format!("{path}/dislike"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], true);
}

#[tokio::test]
async fn test_like_missing_item_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("PUT", "/api/v1/venues/1/catalogs/1/items/1/like", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_are_not_lost() {
    let (app, path) = seeded().await;
    let like_path = format!("{path}/like");

    let responses = join_all((0..50).map(|_| app.request("PUT", &like_path, None, None))).await;
    assert!(responses.iter().all(|r| r.status == StatusCode::OK));

    let item = app.request("GET", &path, None, None).await;
    assert_eq!(item.body["data"]["likes_count"], 50);
}
