//! Health and wellness page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use sherise_core::Route;

use crate::content::{CyclePhase, CyclePoint, FitnessRoutine, HealthResource, Tip};
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::state::AppState;

/// Health page template.
#[derive(Template, WebTemplate)]
#[template(path = "health.html")]
pub struct HealthTemplate {
    pub ctx: PageContext,
    pub cycle: Vec<CyclePoint>,
    /// Legend of the four main phases.
    pub phases: [CyclePhase; 4],
    pub mental_wellness: Vec<Tip>,
    pub routines: Vec<FitnessRoutine>,
    pub resources: Vec<HealthResource>,
}

/// Display the health page.
pub async fn show(store: SessionStore, State(state): State<AppState>) -> impl IntoResponse {
    let content = state.content();

    HealthTemplate {
        ctx: PageContext::new(&store, Route::Health),
        cycle: content.cycle().to_vec(),
        phases: [
            CyclePhase::Menstrual,
            CyclePhase::Follicular,
            CyclePhase::Ovulation,
            CyclePhase::Luteal,
        ],
        mental_wellness: content.mental_wellness_tips().to_vec(),
        routines: content.fitness_routines().to_vec(),
        resources: content.health_resources().to_vec(),
    }
}
