//! Authentication route handlers.
//!
//! Authentication is a mock: any syntactically valid email signs in, and the
//! password is never checked or stored.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use sherise_core::{Email, Route};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Signup form data.
#[derive(Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

impl MessageQuery {
    /// Translation key for the error code, ignoring unknown codes.
    pub(crate) fn error_key(&self) -> Option<&'static str> {
        match self.error.as_deref()? {
            "email" => Some("errorEmail"),
            "name" => Some("errorName"),
            _ => None,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub error: Option<&'static str>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
    pub error: Option<&'static str>,
}

// =============================================================================
// Login
// =============================================================================

/// Display the login page.
pub async fn login_page(
    store: SessionStore,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        ctx: PageContext::new(&store, Route::Login),
        error: query.error_key(),
    }
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(mut store: SessionStore, Form(form): Form<LoginForm>) -> Result<Redirect> {
    let Ok(email) = Email::parse(&form.email) else {
        return Ok(Redirect::to("/login?error=email"));
    };

    store.login(email, &form.password);
    store.save().await?;

    if let Some(user) = store.user() {
        set_sentry_user(user.email.as_str(), &user.name);
        tracing::info!(user = %user.email, "User logged in");
    }
    add_breadcrumb("auth", "Logged in", None);

    Ok(Redirect::to(store.landing_path()))
}

// =============================================================================
// Signup
// =============================================================================

/// Display the signup page.
pub async fn signup_page(
    store: SessionStore,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    SignupTemplate {
        ctx: PageContext::new(&store, Route::Signup),
        error: query.error_key(),
    }
}

/// Handle signup form submission.
#[instrument(skip_all)]
pub async fn signup(mut store: SessionStore, Form(form): Form<SignupForm>) -> Result<Redirect> {
    if form.name.trim().is_empty() {
        return Ok(Redirect::to("/signup?error=name"));
    }
    let Ok(email) = Email::parse(&form.email) else {
        return Ok(Redirect::to("/signup?error=email"));
    };

    store.signup(&form.name, email, &form.password);
    store.save().await?;

    if let Some(user) = store.user() {
        set_sentry_user(user.email.as_str(), &user.name);
        tracing::info!(user = %user.email, "User signed up");
    }
    add_breadcrumb("auth", "Signed up", None);

    Ok(Redirect::to(store.landing_path()))
}

// =============================================================================
// Logout
// =============================================================================

/// Log out. Preferences survive; page state such as drafted posts does not.
#[instrument(skip_all)]
pub async fn logout(mut store: SessionStore) -> Result<Redirect> {
    if store.is_authenticated() {
        tracing::info!("User logged out");
    }

    store.logout();
    store.clear_page_state().await?;
    store.save().await?;

    clear_sentry_user();
    add_breadcrumb("auth", "Logged out", None);

    Ok(Redirect::to(Route::Landing.path()))
}
