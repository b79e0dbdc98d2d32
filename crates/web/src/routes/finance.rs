//! Finance page: budget breakdown and savings goal.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use sherise_core::Route;

use crate::content::{Budget, Tip};
use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "finance.html")]
pub struct FinanceTemplate {
    pub ctx: PageContext,
    pub budget: Budget,
    pub tips: Vec<Tip>,
}

pub async fn show(store: SessionStore, State(state): State<AppState>) -> impl IntoResponse {
    let content = state.content();

    FinanceTemplate {
        ctx: PageContext::new(&store, Route::Finance),
        budget: content.budget().clone(),
        tips: content.financial_tips().to_vec(),
    }
}
