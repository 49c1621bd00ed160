use serde_json::{Value, json};

use crate::common::{TestApp, routes};

fn item(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "description": "Pure silk with zari work",
        "image_base64": "iVBORw0KGgo=",
        "category": category,
        "color": "maroon",
        "pattern": "temple border",
    })
}

#[tokio::test]
async fn create_and_list_catalog() {
    let app = TestApp::spawn().await;

    let created = app
        .post(routes::CATALOG, &item("Kanjivaram Silk", "traditional"))
        .await;
    assert_eq!(created.status, 200, "{}", created.text);
    assert_eq!(created.body["name"], "Kanjivaram Silk");
    assert_eq!(created.body["color"], "maroon");
    assert!(!created.id().is_empty());

    app.post(routes::CATALOG, &item("Chiffon Drape", "party"))
        .await;

    let res = app.get(routes::CATALOG).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn filter_catalog_by_category() {
    let app = TestApp::spawn().await;
    app.post(routes::CATALOG, &item("Kanjivaram Silk", "traditional"))
        .await;
    app.post(routes::CATALOG, &item("Banarasi", "traditional"))
        .await;
    app.post(routes::CATALOG, &item("Chiffon Drape", "party"))
        .await;

    let res = app.get(&routes::catalog_category("traditional")).await;
    assert_eq!(res.status, 200);
    let items = res.body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["category"] == "traditional"));

    let res = app.get(&routes::catalog_category("bridal")).await;
    assert_eq!(res.status, 200);
    assert!(res.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_name_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app.post(routes::CATALOG, &item("", "traditional")).await;
    res.assert_error(400, "VALIDATION_ERROR");

    let res = app.get(routes::CATALOG).await;
    assert!(res.body.as_array().unwrap().is_empty());
}
