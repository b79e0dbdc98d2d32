//! Route guard middleware.
//!
//! Runs [`sherise_core::resolve`] for every request before any handler, so a
//! disallowed page is never rendered. Redirects are `303 See Other`; the
//! browser replaces the request rather than keeping the guarded URL.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use sherise_core::{Phase, Resolution, resolve};
use tower_sessions::Session;

use super::store::load_store;
use crate::error::AppError;

/// Redirect requests the session's phase may not see.
///
/// Requests for paths outside the page table (static files, `/healthz`,
/// unknown paths) are public and pass straight through.
pub async fn route_guard_middleware(request: Request, next: Next) -> Response {
    let Some(session) = request.extensions().get::<Session>().cloned() else {
        return AppError::StoreUnavailable.into_response();
    };

    let phase = match load_store(&session).await {
        Ok(store) => store.map_or(Phase::Anonymous, |s| s.phase()),
        Err(e) => return e.into_response(),
    };

    match resolve(phase, request.uri().path()) {
        Resolution::Allow => next.run(request).await,
        Resolution::Redirect(route) => {
            tracing::debug!(
                path = %request.uri().path(),
                ?phase,
                to = route.path(),
                "Route guard redirect"
            );
            Redirect::to(route.path()).into_response()
        }
    }
}
