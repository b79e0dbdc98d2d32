//! Career growth page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use sherise_core::Route;

use crate::content::{Course, Job, Mentor, NetworkingEvent};
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "career.html")]
pub struct CareerTemplate {
    pub ctx: PageContext,
    pub mentors: Vec<Mentor>,
    pub jobs: Vec<Job>,
    pub courses: Vec<Course>,
    pub events: Vec<NetworkingEvent>,
}

pub async fn show(store: SessionStore, State(state): State<AppState>) -> impl IntoResponse {
    let content = state.content();

    CareerTemplate {
        ctx: PageContext::new(&store, Route::Career),
        mentors: content.mentors().to_vec(),
        jobs: content.jobs().to_vec(),
        courses: content.courses().to_vec(),
        events: content.events().to_vec(),
    }
}
