use gatehouse_core::{SessionStore, SessionToken};

use crate::helpers::{TestApp, jo_lee, location, session_cookie};

#[tokio::test]
async fn logout_ends_session_and_redirects_to_login() {
    let app = TestApp::new().await;
    let registered = app.register(&jo_lee()).await;
    let session = SessionToken::new(session_cookie(&registered).expect("signed in"));

    let response = app
        .http_client
        .post(format!("{}/user/logout", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/user/login"));
    assert_eq!(app.session_store.lookup(&session).await.unwrap(), None);

    let home = app.get("/").await.text().await.unwrap();
    assert!(!home.contains("Signed in as"));
}

#[tokio::test]
async fn logout_without_session_still_redirects_to_login() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/user/logout", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/user/login"));
}
