//! Safety and support page, including the mock SOS alert.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use sherise_core::Route;
use tracing::instrument;

use crate::content::{Helpline, InfoCard};
use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::state::AppState;

/// Safety page template.
#[derive(Template, WebTemplate)]
#[template(path = "safety.html")]
pub struct SafetyTemplate {
    pub ctx: PageContext,
    /// Show the "alert sent" panel.
    pub alert_sent: bool,
    pub helplines: Vec<Helpline>,
    pub legal_rights: Vec<InfoCard>,
    pub safety_tips: Vec<InfoCard>,
}

impl SafetyTemplate {
    fn new(store: &SessionStore, state: &AppState, alert_sent: bool) -> Self {
        let content = state.content();
        Self {
            ctx: PageContext::new(store, Route::Safety),
            alert_sent,
            helplines: content.helplines().to_vec(),
            legal_rights: content.legal_rights().to_vec(),
            safety_tips: content.safety_tips().to_vec(),
        }
    }
}

/// Display the safety page.
pub async fn show(store: SessionStore, State(state): State<AppState>) -> impl IntoResponse {
    SafetyTemplate::new(&store, &state, false)
}

/// Trigger the SOS alert.
///
/// Nothing is sent anywhere; the alert is logged and the page confirms it.
#[instrument(skip_all)]
pub async fn sos(store: SessionStore, State(state): State<AppState>) -> impl IntoResponse {
    let user = store.user().map(|u| u.email.to_string()).unwrap_or_default();
    tracing::warn!(%user, "SOS alert triggered");
    add_breadcrumb("safety", "SOS alert triggered", None);

    SafetyTemplate::new(&store, &state, true)
}
