use gatehouse_core::{SessionStore, SessionToken, UserStore};
use secrecy::ExposeSecret;

use crate::helpers::{TestApp, jo_lee, location, session_cookie, with_field};

#[tokio::test]
async fn register_page_renders_empty_form_with_csrf_token() {
    let app = TestApp::new().await;

    let response = app.get("/user/register").await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.cookies().any(|c| c.name() == "csrf_token"));

    let html = response.text().await.unwrap();
    assert!(html.contains("<title>Register</title>"));
    assert!(html.contains(r#"name="_csrf" value=""#));
    assert!(!html.contains(r#"class="errors""#));
}

#[tokio::test]
async fn valid_registration_persists_user_and_signs_in() {
    let app = TestApp::new().await;

    let response = app.register(&jo_lee()).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/"));
    let session = session_cookie(&response).expect("session cookie set");
    assert_eq!(
        app.session_store
            .lookup(&SessionToken::new(session))
            .await
            .unwrap()
            .as_deref(),
        Some("jo@example.com")
    );

    let user = app
        .user_store
        .find_by_email("jo@example.com")
        .await
        .unwrap()
        .expect("user persisted");
    assert_eq!(user.first_name(), "Jo");
    assert_ne!(user.hashed_password().as_ref().expose_secret(), "Abc123!x");

    let home = app.get("/").await.text().await.unwrap();
    assert!(home.contains("Signed in as jo@example.com"));
}

#[tokio::test]
async fn mismatched_confirmation_re_renders_form() {
    let app = TestApp::new().await;

    let response = app
        .register(&with_field(jo_lee(), "confirmPassword", "different"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(session_cookie(&response).is_none());
    let html = response.text().await.unwrap();
    assert!(html.contains("Confirm Password does not match Password"));
    assert!(html.contains(r#"value="jo@example.com""#));
    assert!(!html.contains("Abc123!x"));
    assert!(
        app.user_store
            .find_by_email("jo@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn missing_fields_are_reported_and_nothing_is_persisted() {
    let app = TestApp::new().await;

    let cases = [
        ("firstName", "Please provide a value for First Name"),
        ("lastName", "Please provide a value for Last Name"),
        ("emailAddress", "Please provide a value for Email Address"),
        ("password", "Please provide a value for Password"),
        ("confirmPassword", "Please provide a value for Confirm Password"),
    ];

    for (field, message) in cases {
        let response = app.register(&with_field(jo_lee(), field, "")).await;

        assert_eq!(response.status().as_u16(), 200, "{field}");
        let html = response.text().await.unwrap();
        assert!(html.contains(message), "{field}: {html}");
    }

    assert!(
        app.user_store
            .find_by_email("jo@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn submission_without_csrf_token_is_forbidden() {
    let app = TestApp::new().await;

    let response = app.post_form("/user/register", &jo_lee()).await;

    assert_eq!(response.status().as_u16(), 403);
    assert!(
        app.user_store
            .find_by_email("jo@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn duplicate_email_is_a_generic_server_error() {
    let app = TestApp::new().await;
    app.register(&jo_lee()).await;

    let response = app.register(&jo_lee()).await;

    assert_eq!(response.status().as_u16(), 500);
    let html = response.text().await.unwrap();
    assert!(!html.contains("User already exists"));
}
