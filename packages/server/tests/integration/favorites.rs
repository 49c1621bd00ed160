use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn favorite_round_trip() {
    let app = TestApp::spawn().await;
    let tryon_id = app.create_tryon().await;

    let res = app
        .post(
            routes::FAVORITES,
            &json!({"tryon_id": tryon_id, "user_id": "user-123"}),
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["message"], "Added to favorites successfully");

    let res = app.get(&routes::favorites_of("user-123")).await;
    assert_eq!(res.status, 200);
    let favorites = res.body.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], tryon_id.as_str());
    assert_eq!(favorites[0]["is_favorite"], true);
    assert_eq!(favorites[0]["saree_details"]["has_body"], false);

    let res = app.delete(&routes::favorite(&tryon_id)).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["message"], "Removed from favorites successfully");

    let res = app.get(&routes::favorites_of("user-123")).await;
    assert!(res.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn favorites_are_scoped_to_user() {
    let app = TestApp::spawn().await;
    let first = app.create_tryon().await;
    let second = app.create_tryon().await;

    app.post(
        routes::FAVORITES,
        &json!({"tryon_id": first, "user_id": "alice"}),
    )
    .await;
    app.post(
        routes::FAVORITES,
        &json!({"tryon_id": second, "user_id": "bob"}),
    )
    .await;

    let res = app.get(&routes::favorites_of("alice")).await;
    let favorites = res.body.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], first.as_str());

    let res = app.get(&routes::favorites_of("nobody")).await;
    assert!(res.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn favoriting_twice_is_idempotent() {
    let app = TestApp::spawn().await;
    let tryon_id = app.create_tryon().await;
    let body = json!({"tryon_id": tryon_id, "user_id": "user-123"});

    assert_eq!(app.post(routes::FAVORITES, &body).await.status, 200);
    assert_eq!(app.post(routes::FAVORITES, &body).await.status, 200);

    let res = app.get(&routes::favorites_of("user-123")).await;
    assert_eq!(res.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_result_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::FAVORITES,
            &json!({"tryon_id": "missing", "user_id": "user-123"}),
        )
        .await;
    res.assert_error(404, "NOT_FOUND");

    let res = app.delete(&routes::favorite("missing")).await;
    res.assert_error(404, "NOT_FOUND");
}
