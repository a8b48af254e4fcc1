use crate::helpers::TestApp;

#[tokio::test]
async fn anonymous_visitors_get_login_and_register_links() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"href="/user/login""#));
    assert!(!html.contains("Signed in as"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert!(response.headers().contains_key("x-request-id"));
}
