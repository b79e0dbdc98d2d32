//! Session and preferences store.
//!
//! [`Store`] is the single owner of a browser session's state. Its fields are
//! private; callers change it only through the operations below, none of
//! which can fail.
//!
//! Authentication is a tagged [`AuthState`] rather than independent flags,
//! so "onboarded but not signed in" cannot be represented.

use serde::{Deserialize, Serialize};

use crate::guard::Phase;
use crate::route::Route;
use crate::types::{Email, FontSize, LanguageCode, Preferences, User};

/// Who is signed in, and whether they finished onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Anonymous,
    /// Signed in, onboarding not completed yet.
    Onboarding { user: User },
    /// Signed in and onboarded.
    Active { user: User },
}

impl AuthState {
    /// The guard phase this state corresponds to.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Anonymous => Phase::Anonymous,
            Self::Onboarding { .. } => Phase::AuthenticatedNotOnboarded,
            Self::Active { .. } => Phase::AuthenticatedOnboarded,
        }
    }

    const fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Onboarding { user } | Self::Active { user } => Some(user),
        }
    }
}

/// Session state plus the operations that mutate it.
///
/// # Example
///
/// ```
/// use sherise_core::{Email, Phase, Store};
///
/// let mut store = Store::default();
/// store.login(Email::parse("jane@example.com").unwrap(), "ignored");
/// assert_eq!(store.phase(), Phase::AuthenticatedNotOnboarded);
///
/// store.complete_onboarding(["health", "finance"]);
/// assert!(store.has_completed_onboarding());
///
/// store.logout();
/// assert!(!store.is_authenticated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Store {
    auth: AuthState,
    preferences: Preferences,
}

impl Store {
    /// A logged-out store with default preferences in `language`.
    #[must_use]
    pub fn new(language: LanguageCode) -> Self {
        Self {
            auth: AuthState::Anonymous,
            preferences: Preferences::with_language(language),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub const fn auth(&self) -> &AuthState {
        &self.auth
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.auth.phase()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self.auth, AuthState::Anonymous)
    }

    #[must_use]
    pub const fn has_completed_onboarding(&self) -> bool {
        matches!(self.auth, AuthState::Active { .. })
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.auth.user()
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub const fn language(&self) -> &LanguageCode {
        self.preferences.language()
    }

    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.preferences.dark_mode
    }

    #[must_use]
    pub const fn high_contrast(&self) -> bool {
        self.preferences.high_contrast
    }

    #[must_use]
    pub const fn font_size(&self) -> FontSize {
        self.preferences.font_size
    }

    /// Where to send the user right after login or signup.
    #[must_use]
    pub const fn landing_path(&self) -> &'static str {
        match self.auth {
            AuthState::Anonymous => Route::Login.path(),
            AuthState::Onboarding { .. } => Route::Onboarding.path(),
            AuthState::Active { .. } => Route::Dashboard.path(),
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Sign in with an email. The password is never checked.
    pub fn login(&mut self, email: Email, _password: &str) {
        let user = User::from_email(email, self.preferences.language.clone());
        self.auth = AuthState::Onboarding { user };
    }

    /// Create an account and sign in. The password is never checked.
    pub fn signup(&mut self, name: &str, email: Email, _password: &str) {
        let user = User::from_signup(name, email, self.preferences.language.clone());
        self.auth = AuthState::Onboarding { user };
    }

    /// Sign out. Language and theme preferences are kept.
    pub fn logout(&mut self) {
        self.auth = AuthState::Anonymous;
    }

    /// Record the chosen interests and finish onboarding.
    ///
    /// Does nothing when nobody is signed in. Calling it again once onboarded
    /// replaces the interests.
    pub fn complete_onboarding<I, S>(&mut self, interests: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.auth = match std::mem::take(&mut self.auth) {
            AuthState::Anonymous => AuthState::Anonymous,
            AuthState::Onboarding { mut user } | AuthState::Active { mut user } => {
                user.set_interests(interests);
                AuthState::Active { user }
            }
        };
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    pub fn set_language(&mut self, language: LanguageCode) {
        self.preferences.language = language;
    }

    pub const fn toggle_dark_mode(&mut self) {
        self.preferences.dark_mode = !self.preferences.dark_mode;
    }

    pub const fn toggle_high_contrast(&mut self) {
        self.preferences.high_contrast = !self.preferences.high_contrast;
    }

    pub const fn set_font_size(&mut self, size: FontSize) {
        self.preferences.font_size = size;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    fn logged_in() -> Store {
        let mut store = Store::default();
        store.login(email("jane@example.com"), "hunter2");
        store
    }

    #[test]
    fn test_new_store_is_logged_out() {
        let store = Store::new(LanguageCode::parse("hi").unwrap());
        assert!(!store.is_authenticated());
        assert!(!store.has_completed_onboarding());
        assert!(store.user().is_none());
        assert_eq!(store.language().as_str(), "hi");
        assert!(!store.dark_mode());
        assert!(!store.high_contrast());
        assert_eq!(store.font_size(), FontSize::Normal);
    }

    #[test]
    fn test_login_builds_user_from_email() {
        let store = logged_in();
        assert!(store.is_authenticated());
        assert!(!store.has_completed_onboarding());
        let user = store.user().unwrap();
        assert_eq!(user.email.as_str(), "jane@example.com");
        assert_eq!(user.name, "jane");
        assert_eq!(user.avatar, "JA");
    }

    #[test]
    fn test_login_ignores_password() {
        let mut a = Store::default();
        let mut b = Store::default();
        a.login(email("jane@example.com"), "");
        b.login(email("jane@example.com"), "something else entirely");
        assert_eq!(a, b);
    }

    #[test]
    fn test_signup_builds_user_from_name() {
        let mut store = Store::default();
        store.signup("Priya Sharma", email("priya@example.com"), "pw");
        assert_eq!(store.phase(), Phase::AuthenticatedNotOnboarded);
        let user = store.user().unwrap();
        assert_eq!(user.name, "Priya Sharma");
        assert_eq!(user.avatar, "PR");
        assert_eq!(user.email.as_str(), "priya@example.com");
    }

    #[test]
    fn test_user_language_follows_preference_at_creation() {
        let mut store = Store::default();
        store.set_language(LanguageCode::parse("hi").unwrap());
        store.login(email("jane@example.com"), "pw");
        assert_eq!(store.user().unwrap().language.as_str(), "hi");
    }

    #[test]
    fn test_complete_onboarding_sets_interests() {
        let mut store = logged_in();
        store.complete_onboarding(["health", "finance"]);
        assert!(store.has_completed_onboarding());
        assert_eq!(store.phase(), Phase::AuthenticatedOnboarded);
        assert_eq!(store.user().unwrap().interests, ["health", "finance"]);
    }

    #[test]
    fn test_complete_onboarding_without_user_is_noop() {
        let mut store = Store::default();
        store.complete_onboarding(["health"]);
        assert_eq!(store.phase(), Phase::Anonymous);
        assert!(!store.has_completed_onboarding());
    }

    #[test]
    fn test_complete_onboarding_with_no_interests() {
        let mut store = logged_in();
        store.complete_onboarding(Vec::<String>::new());
        assert!(store.has_completed_onboarding());
        assert!(store.user().unwrap().interests.is_empty());
    }

    #[test]
    fn test_logout_resets_auth_and_keeps_preferences() {
        let mut store = logged_in();
        store.set_language(LanguageCode::parse("hi").unwrap());
        store.toggle_dark_mode();
        store.set_font_size(FontSize::Large);
        store.complete_onboarding(["career"]);

        store.logout();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(!store.has_completed_onboarding());
        assert_eq!(store.language().as_str(), "hi");
        assert!(store.dark_mode());
        assert_eq!(store.font_size(), FontSize::Large);
    }

    #[test]
    fn test_logout_from_every_state() {
        for mut store in [Store::default(), logged_in(), {
            let mut s = logged_in();
            s.complete_onboarding(["safety"]);
            s
        }] {
            store.logout();
            assert_eq!(store.phase(), Phase::Anonymous);
        }
    }

    #[test]
    fn test_font_size_round_trip() {
        let mut store = Store::default();
        store.set_font_size("large".parse().unwrap());
        assert_eq!(store.font_size().as_str(), "large");
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut store = Store::default();
        let dark = store.dark_mode();
        let contrast = store.high_contrast();

        store.toggle_dark_mode();
        assert_ne!(store.dark_mode(), dark);
        store.toggle_dark_mode();
        assert_eq!(store.dark_mode(), dark);

        store.toggle_high_contrast();
        store.toggle_high_contrast();
        assert_eq!(store.high_contrast(), contrast);
    }

    #[test]
    fn test_landing_path_by_phase() {
        let mut store = Store::default();
        assert_eq!(store.landing_path(), "/login");
        store.login(email("jane@example.com"), "pw");
        assert_eq!(store.landing_path(), "/onboarding");
        store.complete_onboarding(["health"]);
        assert_eq!(store.landing_path(), "/dashboard");
    }

    #[test]
    fn test_serde_round_trip_keeps_state() {
        let mut store = logged_in();
        store.complete_onboarding(["health"]);
        store.toggle_high_contrast();

        let json = serde_json::to_string(&store).unwrap();
        let back: Store = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
