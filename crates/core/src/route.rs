//! The static page table.
//!
//! Every page the application serves, its exact path, and the guard that
//! protects it. Paths are matched exactly; anything else is [`Route::NotFound`].

use crate::guard::Guard;

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Onboarding,
    Dashboard,
    Health,
    Safety,
    Career,
    Community,
    Finance,
    Stories,
    Profile,
    Settings,
    NotFound,
}

impl Route {
    /// Every routable page (excludes the catch-all).
    pub const ALL: [Self; 13] = [
        Self::Landing,
        Self::Login,
        Self::Signup,
        Self::Onboarding,
        Self::Dashboard,
        Self::Health,
        Self::Safety,
        Self::Career,
        Self::Community,
        Self::Finance,
        Self::Stories,
        Self::Profile,
        Self::Settings,
    ];

    /// Pages behind [`Guard::Protected`].
    pub const PROTECTED: [Self; 9] = [
        Self::Dashboard,
        Self::Health,
        Self::Safety,
        Self::Career,
        Self::Community,
        Self::Finance,
        Self::Stories,
        Self::Profile,
        Self::Settings,
    ];

    /// Look up the page for a request path.
    ///
    /// Paths match exactly. The web layer trims trailing slashes before
    /// routing, so `/health/` never reaches this lookup.
    ///
    /// ```
    /// use sherise_core::Route;
    ///
    /// assert_eq!(Route::from_path("/career"), Route::Career);
    /// assert_eq!(Route::from_path("/career/jobs"), Route::NotFound);
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Self::NotFound)
    }

    /// The exact path of this page. The catch-all has no path of its own and
    /// reports `/404`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Onboarding => "/onboarding",
            Self::Dashboard => "/dashboard",
            Self::Health => "/health",
            Self::Safety => "/safety",
            Self::Career => "/career",
            Self::Community => "/community",
            Self::Finance => "/finance",
            Self::Stories => "/stories",
            Self::Profile => "/profile",
            Self::Settings => "/settings",
            Self::NotFound => "/404",
        }
    }

    /// The guard evaluated before this page renders.
    #[must_use]
    pub const fn guard(self) -> Guard {
        match self {
            Self::Login | Self::Signup => Guard::AuthOnly,
            Self::Dashboard
            | Self::Health
            | Self::Safety
            | Self::Career
            | Self::Community
            | Self::Finance
            | Self::Stories
            | Self::Profile
            | Self::Settings => Guard::Protected,
            Self::Landing | Self::Onboarding | Self::NotFound => Guard::Public,
        }
    }

    /// Translation key of the navigation label, for pages in the sidebar.
    #[must_use]
    pub const fn nav_key(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("navDashboard"),
            Self::Health => Some("navHealth"),
            Self::Safety => Some("navSafety"),
            Self::Career => Some("navCareer"),
            Self::Community => Some("navCommunity"),
            Self::Finance => Some("navFinance"),
            Self::Stories => Some("navStories"),
            Self::Profile => Some("navProfile"),
            Self::Settings => Some("navSettings"),
            Self::Landing | Self::Login | Self::Signup | Self::Onboarding | Self::NotFound => None,
        }
    }
}
