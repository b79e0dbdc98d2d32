//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use rand::seq::IndexedRandom;
use sherise_core::Route;

use crate::content::{Quote, Reminder};
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::state::AppState;

/// A module shortcut card.
pub struct ModuleCard {
    pub path: &'static str,
    pub title_key: &'static str,
    pub desc_key: &'static str,
    pub accent: &'static str,
}

pub(crate) const MODULES: [ModuleCard; 6] = [
    ModuleCard {
        path: Route::Health.path(),
        title_key: "dashboardHealthHub",
        desc_key: "dashboardHealthDesc",
        accent: "health",
    },
    ModuleCard {
        path: Route::Safety.path(),
        title_key: "dashboardSafetySupport",
        desc_key: "dashboardSafetyDesc",
        accent: "safety",
    },
    ModuleCard {
        path: Route::Career.path(),
        title_key: "dashboardCareer",
        desc_key: "dashboardCareerDesc",
        accent: "career",
    },
    ModuleCard {
        path: Route::Community.path(),
        title_key: "dashboardCommunity",
        desc_key: "dashboardCommunityDesc",
        accent: "community",
    },
    ModuleCard {
        path: Route::Finance.path(),
        title_key: "dashboardFinance",
        desc_key: "dashboardFinanceDesc",
        accent: "finance",
    },
    ModuleCard {
        path: Route::Stories.path(),
        title_key: "dashboardStories",
        desc_key: "dashboardStoriesDesc",
        accent: "stories",
    },
];

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub tip: Option<&'static str>,
    pub reminder: Option<Reminder>,
    pub quote: Option<Quote>,
    pub modules: &'static [ModuleCard],
}

/// Display the dashboard. The tip and quote are picked at random on every
/// visit.
pub async fn show(store: SessionStore, State(state): State<AppState>) -> impl IntoResponse {
    let content = state.content();
    let mut rng = rand::rng();

    DashboardTemplate {
        ctx: PageContext::new(&store, Route::Dashboard),
        tip: content.wellness_tips().choose(&mut rng).copied(),
        reminder: content.reminders().first().copied(),
        quote: content.quotes().choose(&mut rng).copied(),
        modules: &MODULES,
    }
}
