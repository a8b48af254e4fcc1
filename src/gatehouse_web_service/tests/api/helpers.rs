use gatehouse_adapters::{
    Argon2PasswordHasher, HashMapSessionStore, HashMapUserStore, config::test::APP_ADDRESS,
};
use gatehouse_axum::SessionCookieConfig;
use gatehouse_web_service::WebService;
use reqwest::{Response, redirect::Policy};

pub const SESSION_COOKIE: &str = "gatehouse_session";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
    pub session_store: HashMapSessionStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = HashMapUserStore::new();
        let session_store = HashMapSessionStore::new(3600);

        let router = WebService::new(
            user_store.clone(),
            Argon2PasswordHasher::new(),
            session_store.clone(),
            SessionCookieConfig {
                cookie_name: SESSION_COOKIE.to_string(),
                secure: false,
            },
        )
        .as_nested_router();

        let listener = tokio::net::TcpListener::bind(APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            user_store,
            session_store,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .form(fields)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Load the form page at `path` and return the CSRF token embedded in it.
    pub async fn csrf_token(&self, path: &str) -> String {
        let html = self.get(path).await.text().await.unwrap();
        csrf_token_from(&html)
    }

    /// Submit a form the way a browser would: fetch the page, then post with its token.
    pub async fn submit(&self, path: &str, fields: &[(&str, &str)]) -> Response {
        let token = self.csrf_token(path).await;
        let mut fields = fields.to_vec();
        fields.push(("_csrf", token.as_str()));
        self.post_form(path, &fields).await
    }

    pub async fn register(&self, fields: &[(&str, &str)]) -> Response {
        self.submit("/user/register", fields).await
    }

    pub async fn login(&self, email_address: &str, password: &str) -> Response {
        self.submit(
            "/user/login",
            &[("emailAddress", email_address), ("password", password)],
        )
        .await
    }
}

pub fn csrf_token_from(html: &str) -> String {
    let marker = r#"name="_csrf" value=""#;
    let start = html.find(marker).expect("form has a CSRF field") + marker.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].to_string()
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

pub fn jo_lee() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Jo"),
        ("lastName", "Lee"),
        ("emailAddress", "jo@example.com"),
        ("password", "Abc123!x"),
        ("confirmPassword", "Abc123!x"),
    ]
}

pub fn with_field(
    mut fields: Vec<(&'static str, &'static str)>,
    name: &'static str,
    value: &'static str,
) -> Vec<(&'static str, &'static str)> {
    fields.retain(|(field, _)| *field != name);
    fields.push((name, value));
    fields
}
