//! HTTP route handlers.
//!
//! # Route Structure
//!
//! Every page action is a `POST` to the page's own path, so the route guard
//! covers actions exactly as it covers pages.
//!
//! ```text
//! GET  /              - Landing page (public)
//! GET  /login         - Login form (auth only)
//! POST /login         - Log in
//! GET  /signup        - Signup form (auth only)
//! POST /signup        - Create account
//! POST /logout        - Log out (public)
//! GET  /onboarding    - Onboarding wizard, ?step=1|2|3 (public)
//! POST /onboarding    - Choose language, toggle interest, complete
//!
//! # Protected
//! GET  /dashboard     - Greeting, tip, reminder, quote, module cards
//! GET  /health        - Cycle tracker, wellness, fitness, resources
//! GET  /safety        - SOS, helplines, rights, tips
//! POST /safety        - Trigger the (mock) SOS alert
//! GET  /career        - Mentors, jobs, courses, events
//! GET  /community     - Posts, ?topic= filter
//! POST /community     - Create a post
//! GET  /finance       - Budget and savings goal
//! GET  /stories       - Success stories, ?story=<id> opens one
//! GET  /profile       - Profile and interests
//! GET  /settings      - Preferences
//! POST /settings      - Change a preference
//!
//! *    (fallback)     - 404 page
//! ```

pub mod auth;
pub mod career;
pub mod community;
pub mod dashboard;
pub mod finance;
pub mod health;
pub mod landing;
pub mod not_found;
pub mod onboarding;
pub mod profile;
pub mod safety;
pub mod settings;
pub mod stories;

use axum::{
    Router,
    routing::{get, post},
};
use sherise_core::{LanguageCode, Route, Store, Translator, User};

use crate::state::AppState;

/// A sidebar navigation entry.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub path: &'static str,
    pub label_key: &'static str,
    pub active: bool,
}

/// Data every page template needs: translations, theme and the signed-in
/// user.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub tr: Translator,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Theme classes for the `<html class>` attribute.
    pub root_classes: String,
    pub user: Option<User>,
    pub nav: Vec<NavItem>,
}

impl PageContext {
    /// Build the context for `current` from the session store.
    #[must_use]
    pub fn new(store: &Store, current: Route) -> Self {
        let language: &LanguageCode = store.language();
        let nav = Route::PROTECTED
            .into_iter()
            .filter_map(|route| {
                route.nav_key().map(|label_key| NavItem {
                    path: route.path(),
                    label_key,
                    active: route == current,
                })
            })
            .collect();

        Self {
            tr: Translator::new(language.clone()),
            lang: language.to_string(),
            root_classes: store.preferences().root_classes(),
            user: store.user().cloned(),
            nav,
        }
    }

    /// The signed-in user's avatar label, or empty.
    #[must_use]
    pub fn avatar(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.avatar.as_str())
    }

    /// Greeting name: the user's first name, or the translated fallback.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.user
            .as_ref()
            .map(User::first_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.tr.t("friend"))
    }
}

/// Create all page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(Route::Landing.path(), get(landing::show))
        .route(Route::Login.path(), get(auth::login_page).post(auth::login))
        .route(
            Route::Signup.path(),
            get(auth::signup_page).post(auth::signup),
        )
        .route("/logout", post(auth::logout))
        .route(
            Route::Onboarding.path(),
            get(onboarding::show).post(onboarding::update),
        )
        .route(Route::Dashboard.path(), get(dashboard::show))
        .route(Route::Health.path(), get(health::show))
        .route(Route::Safety.path(), get(safety::show).post(safety::sos))
        .route(Route::Career.path(), get(career::show))
        .route(
            Route::Community.path(),
            get(community::show).post(community::create_post),
        )
        .route(Route::Finance.path(), get(finance::show))
        .route(Route::Stories.path(), get(stories::show))
        .route(Route::Profile.path(), get(profile::show))
        .route(
            Route::Settings.path(),
            get(settings::show).post(settings::update),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sherise_core::{DEFAULT_LANGUAGE, Email, has_translation};

    use super::*;
    use crate::content::{CyclePhase, Topic};

    #[test]
    fn test_context_marks_current_page() {
        let ctx = PageContext::new(&Store::default(), Route::Finance);
        let active: Vec<_> = ctx.nav.iter().filter(|n| n.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active.first().unwrap().path, "/finance");
        assert_eq!(ctx.nav.len(), Route::PROTECTED.len());
    }

    #[test]
    fn test_context_greets_friend_when_anonymous() {
        let ctx = PageContext::new(&Store::default(), Route::Dashboard);
        assert_eq!(ctx.first_name(), "friend");
        assert_eq!(ctx.avatar(), "");
    }

    #[test]
    fn test_context_uses_user_and_theme() {
        let mut store = Store::default();
        store.signup("Priya Sharma", Email::parse("priya@example.com").unwrap(), "pw");
        store.toggle_dark_mode();
        let ctx = PageContext::new(&store, Route::Dashboard);
        assert_eq!(ctx.first_name(), "Priya");
        assert_eq!(ctx.avatar(), "PR");
        assert_eq!(ctx.root_classes, "dark");
        assert_eq!(ctx.lang, "en");
    }

    /// Literal keys passed to `t("...")` in every template file under `dir`.
    fn template_keys(dir: &std::path::Path, keys: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                template_keys(&path, keys);
                continue;
            }
            let source = std::fs::read_to_string(&path).unwrap();
            for rest in source.split("t(\"").skip(1) {
                if let Some((key, _)) = rest.split_once('"') {
                    keys.push(key.to_string());
                }
            }
        }
    }

    #[test]
    fn test_translation_keys_have_english_text() {
        let templates = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
        let mut keys = Vec::new();
        template_keys(std::path::Path::new(templates), &mut keys);
        assert!(keys.iter().any(|key| key == "appName"));

        let error_keys = ["email", "name"].into_iter().filter_map(|code| {
            auth::MessageQuery {
                error: Some(code.to_string()),
            }
            .error_key()
        });
        let dynamic = Route::ALL
            .into_iter()
            .filter_map(Route::nav_key)
            .chain(onboarding::INTERESTS.iter().map(|(_, key)| *key))
            .chain(Topic::ALL.into_iter().map(Topic::label_key))
            .chain(CyclePhase::ALL.into_iter().map(CyclePhase::label_key))
            .chain(landing::FEATURES.iter().flat_map(|f| [f.title_key, f.desc_key]))
            .chain(landing::STATS.iter().map(|stat| stat.label_key))
            .chain(dashboard::MODULES.iter().flat_map(|m| [m.title_key, m.desc_key]))
            .chain(error_keys)
            .chain(["friend"]);
        keys.extend(dynamic.map(String::from));

        for key in &keys {
            assert!(has_translation(DEFAULT_LANGUAGE, key), "{key} missing from en");
        }
    }
}
