use crate::helpers;
use serde_json::{Value, json};

fn valid_payload() -> Value {
    json!({
        "comment": "Title",
        "published": "2020-01-01",
        "postId": "1",
        "authorId": "1"
    })
}

// ============================================================================
// Create Comment
// ============================================================================

#[tokio::test]
async fn create_comment_returns_201_for_valid_input() {
    let app = helpers::spawn_app().await;

    let response = app.create_comment(&valid_payload()).await;
    assert_eq!(
        response.status().as_u16(),
        201,
        "Expected 201 Created for valid comment creation"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["comment"], "Title");
    assert_eq!(body["published"], "2020-01-01");
    assert_eq!(body["postId"], "1");
    assert_eq!(body["authorId"], "1");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn create_comment_returns_422_when_a_required_field_is_missing() {
    let app = helpers::spawn_app().await;

    for field in ["comment", "published", "postId", "authorId"] {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove(field);

        let response = app.create_comment(&payload).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Expected 422 when {field} is missing"
        );

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["code"], 422);
        assert!(
            body["message"].as_str().unwrap().contains(field),
            "message should name {field}: {body}"
        );
    }
}

#[tokio::test]
async fn create_comment_returns_422_for_unrelated_payload() {
    let app = helpers::spawn_app().await;

    let response = app
        .create_comment(&json!({ "title": "Title", "body": "Test" }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn create_comment_echoes_free_form_published_text() {
    let app = helpers::spawn_app().await;

    for published in ["2020-0o1-0o1", "2020-1-1", "2020-01-01T12:30:00+02:00"] {
        let mut payload = valid_payload();
        payload["published"] = json!(published);

        let response = app.create_comment(&payload).await;
        assert_eq!(response.status().as_u16(), 201, "published = {published}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["published"], published);
    }
}

#[tokio::test]
async fn create_comment_ignores_non_scalar_id() {
    let app = helpers::spawn_app().await;

    let mut payload = valid_payload();
    payload["id"] = json!(true);

    let response = app.create_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert!(body["id"].is_string(), "server assigns an id: {body}");
}

#[tokio::test]
async fn create_comment_ignores_submitted_id() {
    let app = helpers::spawn_app().await;

    let mut payload = valid_payload();
    payload["id"] = json!(15);

    let response = app.create_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_ne!(body["id"], json!(15));
    assert_ne!(body["id"], json!("15"));
}

#[tokio::test]
async fn create_comment_drops_extra_fields() {
    let app = helpers::spawn_app().await;

    let mut payload = valid_payload();
    payload["extraFieldInput"] = json!(true);

    let response = app.create_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert!(body.get("extraFieldInput").is_none());
}

#[tokio::test]
async fn create_comment_accepts_numeric_references() {
    let app = helpers::spawn_app().await;

    let mut payload = valid_payload();
    payload["postId"] = json!(1);
    payload["authorId"] = json!(7);

    let response = app.create_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["postId"], "1");
    assert_eq!(body["authorId"], "7");
}

#[tokio::test]
async fn create_comment_returns_400_for_malformed_json() {
    let app = helpers::spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/v1/comments", app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
}

// ============================================================================
// Get Comments
// ============================================================================

#[tokio::test]
async fn get_all_comments_returns_empty_list_when_nothing_stored() {
    let app = helpers::spawn_app().await;

    let response = app.get_all_comments().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert!(body["comments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_all_comments_returns_every_stored_comment() {
    let app = helpers::spawn_app().await;

    for post_id in ["1", "2", "3"] {
        app.create_sample_comment(post_id).await;
    }

    let response = app.get_all_comments().await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["comments"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn get_comments_for_post_only_returns_that_posts_comments() {
    let app = helpers::spawn_app().await;

    app.create_sample_comment("11").await;
    app.create_sample_comment("11").await;
    app.create_sample_comment("12").await;

    let response = app.get_comments_for_post("11").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c["postId"] == "11"));
}

// ============================================================================
// Patch Comment
// ============================================================================

#[tokio::test]
async fn patch_comment_returns_200_with_updated_comment() {
    let app = helpers::spawn_app().await;
    let id = app.create_sample_comment("1").await;

    let mut payload = valid_payload();
    payload["id"] = json!(id);
    payload["comment"] = json!("Edited");

    let response = app.patch_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["comment"], "Edited");

    let listed: Value = app.get_all_comments().await.json().await.unwrap();
    assert_eq!(listed["comments"][0]["comment"], "Edited");
}

#[tokio::test]
async fn patch_comment_returns_422_for_missing_fields() {
    let app = helpers::spawn_app().await;
    let id = app.create_sample_comment("1").await;

    let payload = json!({
        "id": id,
        "title": "Title",
        "body": "Test",
        "published": "2020-01-01",
        "authorId": "1"
    });

    let response = app.patch_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn patch_comment_returns_422_without_id() {
    let app = helpers::spawn_app().await;

    let response = app.patch_comment(&valid_payload()).await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn patch_comment_returns_422_for_unknown_id() {
    let app = helpers::spawn_app().await;

    let mut payload = valid_payload();
    payload["id"] = json!("does-not-exist");

    let response = app.patch_comment(&payload).await;
    assert_eq!(response.status().as_u16(), 422);
}

// ============================================================================
// Delete Comment
// ============================================================================

#[tokio::test]
async fn delete_comment_removes_comment_successfully() {
    let app = helpers::spawn_app().await;
    let id = app.create_sample_comment("1").await;

    let response = app.delete_comment(&id).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = app.get_all_comments().await.json().await.unwrap();
    assert!(body["comments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_comment_returns_404_for_unknown_id() {
    let app = helpers::spawn_app().await;

    let response = app.delete_comment("does-not-exist").await;
    assert_eq!(
        response.status().as_u16(),
        404,
        "Expected 404 when deleting a comment that does not exist"
    );
}
