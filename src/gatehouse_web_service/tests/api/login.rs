use gatehouse_core::{SessionStore, SessionToken};

use crate::helpers::{TestApp, jo_lee, location, session_cookie};

const LOGIN_FAILED: &str = "Login failed for the provided email and password";

#[tokio::test]
async fn login_page_renders_empty_form() {
    let app = TestApp::new().await;

    let response = app.get("/user/login").await;
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("<title>Login</title>"));
    assert!(html.contains(r#"name="_csrf" value=""#));
}

#[tokio::test]
async fn correct_credentials_sign_in() {
    let app = TestApp::new().await;
    app.register(&jo_lee()).await;
    app.http_client
        .post(format!("{}/user/logout", app.address))
        .send()
        .await
        .unwrap();

    let response = app.login("jo@example.com", "Abc123!x").await;

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
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let app = TestApp::new().await;
    app.register(&jo_lee()).await;

    let wrong_password = app.login("jo@example.com", "Wrong123!").await;
    assert_eq!(wrong_password.status().as_u16(), 200);
    assert!(session_cookie(&wrong_password).is_none());
    let wrong_password = wrong_password.text().await.unwrap();

    let unknown_email = app.login("jo@example.com.invalid", "Abc123!x").await;
    assert_eq!(unknown_email.status().as_u16(), 200);
    let unknown_email = unknown_email.text().await.unwrap();

    assert!(wrong_password.contains(LOGIN_FAILED));
    assert!(unknown_email.contains(LOGIN_FAILED));
    assert!(!wrong_password.contains("Wrong123!"));

    let strip = |html: &str, email: &str| {
        let token = crate::helpers::csrf_token_from(html);
        html.replace(&token, "TOKEN").replace(email, "EMAIL")
    };
    assert_eq!(
        strip(&wrong_password, "jo@example.com"),
        strip(&unknown_email, "jo@example.com.invalid")
    );
}

#[tokio::test]
async fn blank_fields_use_presence_messages() {
    let app = TestApp::new().await;

    let response = app.login("", "").await;

    let html = response.text().await.unwrap();
    assert!(html.contains("Please provide a value for Email Address"));
    assert!(html.contains("Please provide a value for Password"));
    assert!(!html.contains(LOGIN_FAILED));
}

#[tokio::test]
async fn logging_in_again_ends_the_replaced_session() {
    let app = TestApp::new().await;
    let registered = app.register(&jo_lee()).await;
    let previous = SessionToken::new(session_cookie(&registered).expect("signed in"));

    let response = app.login("jo@example.com", "Abc123!x").await;

    let current = SessionToken::new(session_cookie(&response).expect("new session"));
    assert_ne!(current, previous);
    assert_eq!(app.session_store.lookup(&previous).await.unwrap(), None);
    assert!(app.session_store.lookup(&current).await.unwrap().is_some());
}
