#![allow(clippy::unwrap_used)]

use axum::http::{StatusCode, header};

mod common;

use common::{TestApp, body_string, location};
use sherise_web::routes::community::MAX_OWN_POSTS;

const PROTECTED: [&str; 9] = [
    "/dashboard",
    "/health",
    "/safety",
    "/career",
    "/community",
    "/finance",
    "/stories",
    "/profile",
    "/settings",
];

// =============================================================================
// Guards
// =============================================================================

#[tokio::test]
async fn test_protected_pages_redirect_anonymous_to_login() {
    let mut app = TestApp::new();
    for path in PROTECTED {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/login", "{path}");
    }
}

#[tokio::test]
async fn test_protected_actions_are_guarded_too() {
    let mut app = TestApp::new();
    let response = app
        .post("/community", "title=Hi&content=There&topic=Health")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_public_pages_render_for_anonymous() {
    let mut app = TestApp::new();
    for path in ["/", "/login", "/signup", "/onboarding"] {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_not_onboarded_user_is_sent_to_onboarding() {
    let mut app = TestApp::new();
    let response = app.post("/login", "email=jane@example.com&password=x").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/onboarding");

    for path in PROTECTED {
        let response = app.get(path).await;
        assert_eq!(location(&response), "/onboarding", "{path}");
    }

    // Auth pages stay reachable until onboarding is done.
    assert_eq!(app.get("/login").await.status(), StatusCode::OK);
}

// =============================================================================
// Auth and onboarding flow
// =============================================================================

#[tokio::test]
async fn test_login_onboarding_dashboard_flow() {
    let mut app = TestApp::new();
    app.post("/login", "email=jane@example.com&password=x").await;

    let response = app.post("/onboarding", "action=language&language=en").await;
    assert_eq!(location(&response), "/onboarding?step=2");

    let response = app.post("/onboarding", "action=toggle&interest=health").await;
    assert_eq!(location(&response), "/onboarding?step=2");
    app.post("/onboarding", "action=toggle&interest=finance").await;

    let summary = body_string(app.get("/onboarding?step=3").await).await;
    assert!(summary.contains("Health &#38; Wellness"));
    assert!(summary.contains("Finance"));

    let response = app.post("/onboarding", "action=complete").await;
    assert_eq!(location(&response), "/dashboard");

    let response = app.get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Welcome back, jane!"));

    let profile = body_string(app.get("/profile").await).await;
    assert!(profile.contains("jane@example.com"));
    assert!(profile.contains("Health &#38; Wellness"));

    // Onboarded users are bounced away from the auth pages.
    let response = app.get("/signup").await;
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn test_invalid_email_redirects_with_error() {
    let mut app = TestApp::new();
    let response = app.post("/login", "email=not-an-email&password=x").await;
    assert_eq!(location(&response), "/login?error=email");

    let body = body_string(app.get("/login?error=email").await).await;
    assert!(body.contains("Please enter a valid email address."));
}

#[tokio::test]
async fn test_signup_requires_name() {
    let mut app = TestApp::new();
    let response = app
        .post("/signup", "name=++&email=priya@example.com&password=x")
        .await;
    assert_eq!(location(&response), "/signup?error=name");
}

#[tokio::test]
async fn test_signup_uses_name_for_greeting() {
    let mut app = TestApp::new();
    let response = app
        .post("/signup", "name=Priya+Sharma&email=priya@example.com&password=x")
        .await;
    assert_eq!(location(&response), "/onboarding");
    app.post("/onboarding", "action=complete").await;

    let body = body_string(app.get("/dashboard").await).await;
    assert!(body.contains("Welcome back, Priya!"));
    assert!(body.contains(">PR<"));
}

#[tokio::test]
async fn test_unknown_interest_is_rejected() {
    let mut app = TestApp::new();
    app.post("/login", "email=jane@example.com").await;
    let response = app
        .post("/onboarding", "action=toggle&interest=gardening")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unparseable_step_shows_first_step() {
    let mut app = TestApp::new();
    app.post("/login", "email=jane@example.com&password=x").await;

    let response = app.get("/onboarding?step=abc").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"name="action" value="language""#));
}

#[tokio::test]
async fn test_completing_onboarding_anonymously_goes_to_login() {
    let mut app = TestApp::new();
    let response = app.post("/onboarding", "action=complete").await;
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_logout_keeps_preferences() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &["health"]).await;
    app.post("/settings", "action=dark_mode").await;

    let response = app.post("/logout", "").await;
    assert_eq!(location(&response), "/");

    let response = app.get("/dashboard").await;
    assert_eq!(location(&response), "/login");

    let body = body_string(app.get("/").await).await;
    assert!(body.contains(r#"class="dark""#));
}

// =============================================================================
// Settings
// =============================================================================

#[tokio::test]
async fn test_settings_are_reflected_on_root_element() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    let response = app.post("/settings", "action=dark_mode").await;
    assert_eq!(location(&response), "/settings");
    app.post("/settings", "action=high_contrast").await;
    app.post("/settings", "action=font_size&font_size=extra-large")
        .await;

    let body = body_string(app.get("/health").await).await;
    assert!(body.contains(r#"class="dark high-contrast font-size-extra-large""#));

    // Toggling again switches the theme back off.
    app.post("/settings", "action=dark_mode").await;
    app.post("/settings", "action=high_contrast").await;
    app.post("/settings", "action=font_size&font_size=normal").await;
    let body = body_string(app.get("/health").await).await;
    assert!(body.contains(r#"<html lang="en" class="">"#));
}

#[tokio::test]
async fn test_language_switch_translates_pages() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    app.post("/settings", "action=language&language=hi").await;
    let body = body_string(app.get("/settings").await).await;
    assert!(body.contains(r#"<html lang="hi""#));
    assert!(body.contains("सेटिंग्स"));
}

#[tokio::test]
async fn test_invalid_settings_are_rejected() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    let response = app
        .post("/settings", "action=font_size&font_size=huge")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.post("/settings", "action=language&language=xx").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_community_post_is_listed_first_and_filtered() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &["community"]).await;

    let response = app
        .post(
            "/community",
            "title=My+first+SheRise+post&content=Hello+everyone&topic=Health",
        )
        .await;
    assert_eq!(location(&response), "/community");

    let body = body_string(app.get("/community").await).await;
    let own = body.find("My first SheRise post").unwrap();
    let seeded = body.find("Finally got my promotion!").unwrap();
    assert!(own < seeded);
    assert!(body.contains("Just now"));

    let health = body_string(app.get("/community?topic=Health").await).await;
    assert!(health.contains("My first SheRise post"));
    let career = body_string(app.get("/community?topic=Career").await).await;
    assert!(!career.contains("My first SheRise post"));
}

#[tokio::test]
async fn test_blank_community_post_is_ignored() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    let response = app
        .post("/community", "title=+++&content=Body&topic=Health")
        .await;
    assert_eq!(location(&response), "/community");

    let body = body_string(app.get("/community").await).await;
    assert!(!body.contains(">You<"));
}

#[tokio::test]
async fn test_own_community_posts_are_capped() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    let written = MAX_OWN_POSTS + 5;
    for n in 0..written {
        let form = format!("title=Bulk+post+{n}&content=Body&topic=Health");
        app.post("/community", &form).await;
    }

    let body = body_string(app.get("/community").await).await;
    assert_eq!(body.matches("<h3>Bulk post ").count(), MAX_OWN_POSTS);
    assert!(body.contains(&format!("<h3>Bulk post {}</h3>", written - 1)));
    assert!(!body.contains("<h3>Bulk post 0</h3>"));
    assert!(body.contains("Finally got my promotion!"));
}

#[tokio::test]
async fn test_community_posts_are_cleared_on_logout() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;
    app.post("/community", "title=Temporary&content=Gone+soon&topic=Career")
        .await;
    app.post("/logout", "").await;

    app.sign_in_onboarded("jane@example.com", &[]).await;
    let body = body_string(app.get("/community").await).await;
    assert!(!body.contains("Temporary"));
}

#[tokio::test]
async fn test_sos_confirms_alert() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    let before = body_string(app.get("/safety").await).await;
    assert!(!before.contains("Alert Sent!"));

    let response = app.post("/safety", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Alert Sent!"));
}

#[tokio::test]
async fn test_finance_shows_budget() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    let body = body_string(app.get("/finance").await).await;
    assert!(body.contains("$5,000"));
    assert!(body.contains("$4,000"));
    assert!(body.contains("65%"));
}

#[tokio::test]
async fn test_story_detail_opens_by_id() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &[]).await;

    let list = body_string(app.get("/stories").await).await;
    assert!(!list.contains(r#"id="story-1""#));

    let detail = body_string(app.get("/stories?story=1").await).await;
    assert!(detail.contains(r#"id="story-1""#));

    let unknown = app.get("/stories?story=999").await;
    assert_eq!(unknown.status(), StatusCode::OK);

    let response = app.get("/stories?story=abc").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains(r#"id="story-"#));
}

#[tokio::test]
async fn test_every_protected_page_renders_when_onboarded() {
    let mut app = TestApp::new();
    app.sign_in_onboarded("jane@example.com", &["health", "career"]).await;
    for path in PROTECTED {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

// =============================================================================
// Infrastructure
// =============================================================================

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let mut app = TestApp::new();
    let response = app.get("/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("Oops! This page seems to have wandered off."));
    assert!(body.contains("/no/such/page"));
}

#[tokio::test]
async fn test_trailing_slash_routes_like_the_bare_path() {
    let mut app = TestApp::new();

    let response = app.get("/health/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(app.get("/login/").await.status(), StatusCode::OK);

    app.sign_in_onboarded("jane@example.com", &[]).await;
    assert_eq!(app.get("/health/").await.status(), StatusCode::OK);
    let response = app.get("/login/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn test_healthz() {
    let mut app = TestApp::new();
    let response = app.get("/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let mut app = TestApp::new();
    let response = app.get("/").await;
    let headers = response.headers();
    assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    assert_eq!(
        headers.get(header::CACHE_CONTROL).unwrap(),
        "no-store, max-age=0"
    );
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_stylesheet_is_served_with_long_cache() {
    let mut app = TestApp::new();
    let response = app.get("/static/css/sherise.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=31536000, immutable"
    );
}
