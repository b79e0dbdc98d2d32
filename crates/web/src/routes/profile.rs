//! Profile page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use sherise_core::Route;

use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;
use crate::routes::onboarding::interest_label_key;

#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub ctx: PageContext,
    /// Display labels of the user's interests.
    pub interests: Vec<String>,
}

pub async fn show(store: SessionStore) -> impl IntoResponse {
    let ctx = PageContext::new(&store, Route::Profile);
    let interests = store
        .user()
        .map(|user| {
            user.interests
                .iter()
                .map(|tag| {
                    interest_label_key(tag)
                        .map_or_else(|| tag.clone(), |key| ctx.tr.t(key).to_string())
                })
                .collect()
        })
        .unwrap_or_default();

    ProfileTemplate { ctx, interests }
}
