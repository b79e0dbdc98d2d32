//! Route guards as a pure function.
//!
//! `resolve(phase, path)` decides whether a page may render or where the
//! request must be sent instead. It is evaluated on every request before any
//! rendering and nothing about the decision is cached.
//!
//! | Guard       | Anonymous  | Not onboarded  | Onboarded    |
//! |-------------|------------|----------------|--------------|
//! | `Public`    | allow      | allow          | allow        |
//! | `Protected` | `/login`   | `/onboarding`  | allow        |
//! | `AuthOnly`  | allow      | allow          | `/dashboard` |

use crate::route::Route;

/// Authentication phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Anonymous,
    AuthenticatedNotOnboarded,
    AuthenticatedOnboarded,
}

/// Guard attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    /// Anyone may view.
    Public,
    /// Only signed-in users who finished onboarding.
    Protected,
    /// Sign-in pages; onboarded users are sent to the dashboard.
    ///
    /// Users who are signed in but not onboarded may still open these.
    AuthOnly,
}

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Allow,
    /// Send the client to this page instead, replacing the current history
    /// entry.
    Redirect(Route),
}

impl Resolution {
    /// The redirect target path, if any.
    #[must_use]
    pub const fn redirect_to(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Redirect(route) => Some(route.path()),
        }
    }
}

impl Guard {
    /// Evaluate this guard for a session phase.
    #[must_use]
    pub const fn check(self, phase: Phase) -> Resolution {
        match (self, phase) {
            (Self::Protected, Phase::Anonymous) => Resolution::Redirect(Route::Login),
            (Self::Protected, Phase::AuthenticatedNotOnboarded) => {
                Resolution::Redirect(Route::Onboarding)
            }
            (Self::AuthOnly, Phase::AuthenticatedOnboarded) => {
                Resolution::Redirect(Route::Dashboard)
            }
            _ => Resolution::Allow,
        }
    }
}

/// Decide what happens when a session in `phase` requests `path`.
///
/// ```
/// use sherise_core::{Phase, Resolution, Route, resolve};
///
/// assert_eq!(
///     resolve(Phase::Anonymous, "/finance"),
///     Resolution::Redirect(Route::Login)
/// );
/// assert_eq!(resolve(Phase::AuthenticatedOnboarded, "/finance"), Resolution::Allow);
/// ```
#[must_use]
pub fn resolve(phase: Phase, path: &str) -> Resolution {
    Route::from_path(path).guard().check(phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PHASES: [Phase; 3] = [
        Phase::Anonymous,
        Phase::AuthenticatedNotOnboarded,
        Phase::AuthenticatedOnboarded,
    ];

    #[test]
    fn test_protected_paths_send_anonymous_to_login() {
        for route in Route::PROTECTED {
            assert_eq!(
                resolve(Phase::Anonymous, route.path()),
                Resolution::Redirect(Route::Login),
                "{route:?}"
            );
        }
    }

    #[test]
    fn test_protected_paths_send_not_onboarded_to_onboarding() {
        for route in Route::PROTECTED {
            assert_eq!(
                resolve(Phase::AuthenticatedNotOnboarded, route.path()),
                Resolution::Redirect(Route::Onboarding),
                "{route:?}"
            );
        }
    }

    #[test]
    fn test_protected_paths_render_when_onboarded() {
        for route in Route::PROTECTED {
            assert_eq!(
                resolve(Phase::AuthenticatedOnboarded, route.path()),
                Resolution::Allow,
                "{route:?}"
            );
        }
    }

    #[test]
    fn test_auth_pages_redirect_only_when_onboarded() {
        for path in ["/login", "/signup"] {
            assert_eq!(resolve(Phase::Anonymous, path), Resolution::Allow);
            assert_eq!(
                resolve(Phase::AuthenticatedNotOnboarded, path),
                Resolution::Allow
            );
            assert_eq!(
                resolve(Phase::AuthenticatedOnboarded, path),
                Resolution::Redirect(Route::Dashboard)
            );
        }
    }

    #[test]
    fn test_public_pages_always_render() {
        for phase in ALL_PHASES {
            for path in ["/", "/onboarding", "/no-such-page", "/static/app.css"] {
                assert_eq!(resolve(phase, path), Resolution::Allow, "{phase:?} {path}");
            }
        }
    }

    #[test]
    fn test_redirect_targets_are_never_guarded_against_the_same_phase() {
        // Following a redirect must not bounce again for the same phase.
        for phase in ALL_PHASES {
            for route in Route::ALL {
                if let Resolution::Redirect(target) = route.guard().check(phase) {
                    assert_eq!(target.guard().check(phase), Resolution::Allow);
                }
            }
        }
    }

    #[test]
    fn test_redirect_to() {
        assert_eq!(Resolution::Allow.redirect_to(), None);
        assert_eq!(
            Resolution::Redirect(Route::Login).redirect_to(),
            Some("/login")
        );
    }
}
