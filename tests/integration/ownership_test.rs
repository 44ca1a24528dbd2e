//! Integration tests for owner-chain authorization on mutating routes.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn venue_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "type": "restaurant",
        "description": "Home cooking",
        "address": "1 Sahaidachnoho St",
        "phone": "+380441112233",
    })
}

#[tokio::test]
async fn test_foreign_venue_update_is_not_found() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let stranger = app.standard_session("stranger@example.com").await;
    let venue_id = app.create_venue(&owner, "Kanapa").await;

    let foreign = app
        .request(
            "PUT",
            &format!("/api/v1/venues/{venue_id}"),
            Some(venue_body("Hijacked")),
            Some(&stranger),
        )
        .await;
    let missing = app
        .request(
            "PUT",
            "/api/v1/venues/987654",
            Some(venue_body("Hijacked")),
            Some(&stranger),
        )
        .await;

    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(foreign.body, missing.body);

    let unchanged = app
        .request("GET", &format!("/api/v1/venues/{venue_id}"), None, None)
        .await;
    assert_eq!(unchanged.body["data"]["title"], "Kanapa");
}

#[tokio::test]
async fn test_elevated_account_updates_any_venue() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let admin = app.elevated_session("admin@example.com").await;
    let venue_id = app.create_venue(&owner, "Kanapa").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/venues/{venue_id}"),
            Some(venue_body("Kanapa Renewed")),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Kanapa Renewed");
    assert_eq!(response.body["data"]["type"], "restaurant");
}

#[tokio::test]
async fn test_nested_mutations_follow_owner_chain() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let stranger = app.standard_session("stranger@example.com").await;
    let venue_id = app.create_venue(&owner, "Ostannya Barykada").await;
    let catalog_id = app.create_catalog(&owner, venue_id, "Dinner").await;
    let item_id = app
        .create_item(&owner, venue_id, catalog_id, "Banosh")
        .await;

    let catalog_attempt = app
        .request(
            "POST",
            &format!("/api/v1/venues/{venue_id}/catalogs"),
            Some(json!({ "title": "Sneaky" })),
            Some(&stranger),
        )
        .await;
    assert_eq!(catalog_attempt.status, StatusCode::NOT_FOUND);

    let item_attempt = app
        .request(
            "DELETE",
            &format!("/api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}"),
            None,
            Some(&stranger),
        )
        .await;
    assert_eq!(item_attempt.status, StatusCode::NOT_FOUND);

    let updated = app
        .request(
            "PUT",
            &format!("/api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}"),
            Some(json!({ "title": "Banosh with brynza", "price_uah": 210 })),
            Some(&owner),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["price_uah"], 210);

    let catalog = app
        .request(
            "GET",
            &format!("/api/v1/venues/{venue_id}/catalogs/{catalog_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(catalog.status, StatusCode::OK);
    assert_eq!(catalog.body["data"]["items"][0]["title"], "Banosh with brynza");
}

#[tokio::test]
async fn test_mismatched_path_is_not_found() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let first = app.create_venue(&owner, "First").await;
    let second = app.create_venue(&owner, "Second").await;
    let catalog_id = app.create_catalog(&owner, first, "Menu").await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/venues/{second}/catalogs/{catalog_id}"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_cascades() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let venue_id = app.create_venue(&owner, "Short Lived").await;
    let catalog_id = app.create_catalog(&owner, venue_id, "Menu").await;
    let item_id = app.create_item(&owner, venue_id, catalog_id, "Uzvar").await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/v1/venues/{venue_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let item = app
        .request(
            "GET",
            &format!("/api/v1/venues/{venue_id}/catalogs/{catalog_id}/items/{item_id}"),
            None,
            None,
        )
        .await;
    assert_eq!(item.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_venue_conflicts() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    app.create_venue(&owner, "Twin").await;

    let response = app
        .request(
            "POST",
            "/api/v1/venues",
            Some(venue_body("TWIN")),
            Some(&owner),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_input_is_bad_request() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let venue_id = app.create_venue(&owner, "Checked").await;
    let catalog_id = app.create_catalog(&owner, venue_id, "Menu").await;

    let bad_id = app.request("GET", "/api/v1/venues/abc", None, None).await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);

    let blank_title = app
        .request(
            "POST",
            "/api/v1/venues",
            Some(json!({ "title": "   ", "type": "cafe" })),
            Some(&owner),
        )
        .await;
    assert_eq!(blank_title.status, StatusCode::BAD_REQUEST);

    let negative_price = app
        .request(
            "POST",
            &format!("/api/v1/venues/{venue_id}/catalogs/{catalog_id}/items"),
            Some(json!({ "title": "Free lunch", "price_uah": -5 })),
            Some(&owner),
        )
        .await;
    assert_eq!(negative_price.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_venues_by_owner() {
    let app = TestApp::new();
    let owner = app.standard_session("owner@example.com").await;
    let other = app.standard_session("other@example.com").await;
    let venue_id = app.create_venue(&owner, "Mine").await;
    app.create_venue(&other, "Theirs").await;

    let mine = app
        .request("GET", &format!("/api/v1/venues/{venue_id}"), None, None)
        .await;
    let owner_id = mine.body["data"]["owner_id"].as_i64().expect("owner id");

    let all = app.request("GET", "/api/v1/venues", None, None).await;
    assert_eq!(all.body["data"].as_array().map(Vec::len), Some(2));

    let filtered = app
        .request("GET", &format!("/api/v1/venues?owner_id={owner_id}"), None, None)
        .await;
    assert_eq!(filtered.status, StatusCode::OK);
    assert_eq!(filtered.body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(filtered.body["data"][0]["title"], "Mine");
}
