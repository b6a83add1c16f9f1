mod common;

use common::TestApp;
use common::PASSWORD;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let body = app.register_user("Ada", "ada@example.com", PASSWORD).await;

    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["name"], "Ada");
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert_eq!(body["data"]["password"], "redacted");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::spawn().await;
    app.register_user("Ada", "ada@example.com", PASSWORD).await;

    let response = app
        .post("/api/v1/users")
        .json(&json!({
            "name": "Another Ada",
            "email": "ada@example.com",
            "password": PASSWORD
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_create_user_invalid_input() {
    let app = TestApp::spawn().await;

    let cases = [
        json!({ "name": "", "email": "ada@example.com", "password": PASSWORD }),
        json!({ "name": "Ada", "email": "not-an-email", "password": PASSWORD }),
        json!({ "name": "Ada", "email": "ada@example.com", "password": "weak" }),
        json!({ "name": "Ada", "email": "ada@example.com", "password": "NoDigits!here" }),
    ];

    for case in cases {
        let response = app
            .post("/api/v1/users")
            .json(&case)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{case}");
    }
}

#[tokio::test]
async fn test_get_own_user() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;

    let response = app
        .get(&format!("/api/v1/users/{}", session.user_id))
        .bearer_auth(&session.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], session.user_id.as_str());
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert_eq!(body["data"]["password"], "redacted");
}

#[tokio::test]
async fn test_get_other_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    let ada = app.register_and_login("Ada", "ada@example.com").await;
    let grace = app.register_and_login("Grace", "grace@example.com").await;

    let response = app
        .get(&format!("/api/v1/users/{}", grace.user_id))
        .bearer_auth(&ada.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;

    let response = app
        .get("/api/v1/users/not-a-uuid")
        .bearer_auth(&session.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_other_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    let ada = app.register_and_login("Ada", "ada@example.com").await;
    let grace = app.register_and_login("Grace", "grace@example.com").await;

    let response = app
        .delete(&format!("/api/v1/users/{}", grace.user_id))
        .bearer_auth(&ada.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Grace is untouched
    let response = app.login("grace@example.com", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_own_user() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;

    let response = app
        .delete(&format!("/api/v1/users/{}", session.user_id))
        .bearer_auth(&session.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let response = app.login("ada@example.com", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_own_user() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;

    let response = app
        .put(&format!("/api/v1/users/{}", session.user_id))
        .bearer_auth(&session.access_token)
        .json(&json!({ "name": "Ada Lovelace", "email": "lovelace@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], session.user_id.as_str());
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert_eq!(body["data"]["email"], "lovelace@example.com");
    assert_eq!(body["data"]["password"], "redacted");

    // Credentials follow the new email
    let response = app.login("ada@example.com", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let response = app.login("lovelace@example.com", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_only_name_keeps_email() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;

    let response = app
        .put(&format!("/api/v1/users/{}", session.user_id))
        .bearer_auth(&session.access_token)
        .json(&json!({ "name": "Countess" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Countess");
    assert_eq!(body["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_update_other_user_is_unauthorized() {
    let app = TestApp::spawn().await;
    let ada = app.register_and_login("Ada", "ada@example.com").await;
    let grace = app.register_and_login("Grace", "grace@example.com").await;

    let response = app
        .put(&format!("/api/v1/users/{}", grace.user_id))
        .bearer_auth(&ada.access_token)
        .json(&json!({ "name": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Unauthorized");
}

#[tokio::test]
async fn test_update_user_without_token_is_rejected() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;

    let response = app
        .put(&format!("/api/v1/users/{}", session.user_id))
        .bearer_auth("garbage")
        .json(&json!({ "name": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_user_to_taken_email() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;
    app.register_user("Grace", "grace@example.com", PASSWORD).await;

    let response = app
        .put(&format!("/api/v1/users/{}", session.user_id))
        .bearer_auth(&session.access_token)
        .json(&json!({ "email": "grace@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_user_invalid_input() {
    let app = TestApp::spawn().await;
    let session = app.register_and_login("Ada", "ada@example.com").await;

    for body in [json!({ "email": "not-an-email" }), json!({ "name": "   " })] {
        let response = app
            .put(&format!("/api/v1/users/{}", session.user_id))
            .bearer_auth(&session.access_token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    }
}
