//! Shared helpers for router tests.
//!
//! `TestApp` drives the full application router with `oneshot` and carries the
//! session cookie between requests the way a browser would.

#![allow(clippy::unwrap_used, dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use sherise_web::{config::WebConfig, state::AppState};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub struct TestApp {
    router: NormalizePath<Router>,
    cookie: Option<String>,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(WebConfig::default());
        Self {
            router: sherise_web::app(state),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&mut self, uri: &str, form: &str) -> Response<Body> {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Log in and finish onboarding with the given interests.
    pub async fn sign_in_onboarded(&mut self, email: &str, interests: &[&str]) {
        self.post("/login", &format!("email={email}&password=secret"))
            .await;
        for interest in interests {
            self.post("/onboarding", &format!("action=toggle&interest={interest}"))
                .await;
        }
        let response = self.post("/onboarding", "action=complete").await;
        assert_eq!(location(&response), "/dashboard");
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Response<Body> {
        let response = self.router.clone().oneshot(request).await.unwrap();
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }
        response
    }
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .map_or("", |value| value.to_str().unwrap())
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
