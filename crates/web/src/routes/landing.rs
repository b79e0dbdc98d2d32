//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use sherise_core::Route;

use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;

/// A feature card on the landing page.
pub struct Feature {
    pub title_key: &'static str,
    pub desc_key: &'static str,
    /// CSS modifier for the card accent colour.
    pub accent: &'static str,
}

/// A headline number in the stats strip.
pub struct Stat {
    pub value: &'static str,
    pub label_key: &'static str,
}

pub(crate) const FEATURES: [Feature; 6] = [
    Feature {
        title_key: "featureHealthTitle",
        desc_key: "featureHealthDesc",
        accent: "health",
    },
    Feature {
        title_key: "featureSafetyTitle",
        desc_key: "featureSafetyDesc",
        accent: "safety",
    },
    Feature {
        title_key: "featureCareerTitle",
        desc_key: "featureCareerDesc",
        accent: "career",
    },
    Feature {
        title_key: "featureCommunityTitle",
        desc_key: "featureCommunityDesc",
        accent: "community",
    },
    Feature {
        title_key: "featureFinanceTitle",
        desc_key: "featureFinanceDesc",
        accent: "finance",
    },
    Feature {
        title_key: "featureStoriesTitle",
        desc_key: "featureStoriesDesc",
        accent: "stories",
    },
];

pub(crate) const STATS: [Stat; 3] = [
    Stat {
        value: "50K+",
        label_key: "landingActiveUsers",
    },
    Stat {
        value: "500+",
        label_key: "landingExpertMentors",
    },
    Stat {
        value: "98%",
        label_key: "landingSatisfaction",
    },
];

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub ctx: PageContext,
    pub features: &'static [Feature],
    pub stats: &'static [Stat],
}

/// Display the landing page.
pub async fn show(store: SessionStore) -> impl IntoResponse {
    LandingTemplate {
        ctx: PageContext::new(&store, Route::Landing),
        features: &FEATURES,
        stats: &STATS,
    }
}
