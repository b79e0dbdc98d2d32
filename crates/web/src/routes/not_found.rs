//! Fallback for paths outside the page table.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::IntoResponse,
};
use sherise_core::Route;

use crate::filters;
use crate::middleware::SessionStore;
use crate::routes::PageContext;

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
    pub path: String,
}

/// Render the 404 page and log the attempted path.
pub async fn not_found(store: SessionStore, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    let path = uri.path().to_string();
    tracing::info!(%path, "Page not found");

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            ctx: PageContext::new(&store, Route::NotFound),
            path,
        },
    )
}
