use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::test_server;

#[tokio::test]
async fn should_run_full_item_lifecycle() {
    let server = test_server().await;

    let resp = server
        .post("/items")
        .json(&json!({ "name": "lamp", "description": "desk lamp" }))
        .await;
    resp.assert_status(StatusCode::CREATED);
    let created: Value = resp.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "lamp");
    assert_eq!(created["description"], "desk lamp");

    let resp = server.get("/items").await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>(), json!([created]));

    let resp = server
        .put(&format!("/items/{id}"))
        .json(&json!({ "name": "floor lamp" }))
        .await;
    resp.assert_status_ok();
    assert_eq!(
        resp.json::<Value>(),
        json!({ "id": id, "name": "floor lamp", "description": null })
    );

    let resp = server.get(&format!("/items/{id}")).await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["name"], "floor lamp");

    let resp = server.delete(&format!("/items/{id}")).await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>(), json!({ "message": "item deleted" }));

    server
        .get(&format!("/items/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_list_items_in_id_order() {
    let server = test_server().await;
    for name in ["a", "b", "c"] {
        server
            .post("/items")
            .json(&json!({ "name": name }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let items: Value = server.get("/items").await.json();
    let names: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn should_reject_item_without_name() {
    let server = test_server().await;

    let resp = server
        .post("/items")
        .json(&json!({ "description": "nameless" }))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_return_404_for_unknown_item() {
    let server = test_server().await;

    let resp = server.get("/items/999").await;

    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "ITEM_NOT_FOUND");
}

#[tokio::test]
async fn should_return_404_when_updating_or_deleting_unknown_item() {
    let server = test_server().await;

    server
        .put("/items/999")
        .json(&json!({ "name": "ghost" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/items/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // Service keeps answering afterwards.
    server.get("/items").await.assert_status_ok();
}

#[tokio::test]
async fn should_reject_non_numeric_item_id_with_json_error() {
    let server = test_server().await;

    let responses = [
        server.get("/items/abc").await,
        server
            .put("/items/abc")
            .json(&json!({ "name": "lamp" }))
            .await,
        server.delete("/items/abc").await,
    ];

    for resp in responses {
        resp.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = resp.json();
        assert_eq!(body["kind"], "INVALID_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("abc"));
    }
}
