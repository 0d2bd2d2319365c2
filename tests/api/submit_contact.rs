//! tests/api/submit_contact.rs

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, STORAGE_TABLE};

fn items_path() -> String {
    format!("/tables/{}/items", STORAGE_TABLE)
}

#[tokio::test]
async fn submit_contact_returns_200_for_valid_form_data() {
    let app = spawn_app().await;
    Mock::given(path(items_path()))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.storage_server)
        .await;
    let body = "first_name=Ada&last_name=Lovelace&email=ada%40example.com&message=hello";

    let response = app.post_submit_contact(body.into()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Form submitted successfully!");
}

#[tokio::test]
async fn submit_contact_forwards_the_submission_to_storage_once() {
    let app = spawn_app().await;
    Mock::given(path(items_path()))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.storage_server)
        .await;
    let body = "first_name=Ada&last_name=Lovelace&email=ada%40example.com&company=Analytical%20Engines";

    app.post_submit_contact(body.into()).await;

    let requests = app
        .storage_server
        .received_requests()
        .await
        .expect("Failed to fetch received requests.");
    assert_eq!(requests.len(), 1);
    let stored: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("Failed to parse stored item.");
    assert_eq!(stored["item"]["email"], "ada@example.com");
    assert_eq!(stored["item"]["first_name"], "Ada");
    assert_eq!(stored["item"]["last_name"], "Lovelace");
    assert_eq!(stored["item"]["company"], "Analytical Engines");
    // Optional fields left blank are omitted from the stored item.
    assert!(stored["item"].get("job_title").is_none());
    assert!(stored["item"].get("phone_number").is_none());
}

#[tokio::test]
async fn submit_contact_returns_400_when_required_fields_are_missing() {
    let app = spawn_app().await;
    // Storage must never be invoked for invalid input.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.storage_server)
        .await;
    let test_cases = vec![
        ("last_name=Lovelace&email=ada%40example.com", "first_name"),
        ("first_name=Ada&email=ada%40example.com", "last_name"),
        ("first_name=Ada&last_name=Lovelace", "email"),
        ("first_name=&last_name=Lovelace&email=ada%40example.com", "first_name"),
        ("", "first_name"),
    ];

    for (invalid_body, missing_field) in test_cases {
        let response = app.post_submit_contact(invalid_body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 on request payload: \"{}\"",
            invalid_body
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
        let error = body["error"].as_str().expect("Error message is not a string.");
        assert!(
            error.contains(missing_field),
            "The error \"{}\" does not name the missing field {}",
            error,
            missing_field
        );
    }
}

#[tokio::test]
async fn submit_contact_returns_400_for_a_malformed_email() {
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.storage_server)
        .await;
    let test_cases = vec![
        ("first_name=Ada&last_name=Lovelace&email=not-an-email", "no @ at all"),
        ("first_name=Ada&last_name=Lovelace&email=ada%40", "missing domain"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_submit_contact(invalid_body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return 400 when the email had {}.",
            description
        );
    }
}

#[tokio::test]
async fn submit_contact_returns_500_when_storage_put_fails() {
    let app = spawn_app().await;
    Mock::given(path(items_path()))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.storage_server)
        .await;
    let body = "first_name=Ada&last_name=Lovelace&email=ada%40example.com";

    let response = app.post_submit_contact(body.into()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse body.");
    let error = body["error"].as_str().expect("Error message is not a string.");
    assert_eq!(error, "Failed to store the contact submission.");
    // Generic message: nothing from the submission leaks back to the caller.
    assert!(!error.contains("Ada"));
    assert!(!error.contains("ada@example.com"));
}
