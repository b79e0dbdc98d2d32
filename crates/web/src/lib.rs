//! SheRise web application library.
//!
//! Server-rendered pages for wellness, safety, career, community, finance and
//! success stories. The binary in `main.rs` only loads configuration, sets up
//! tracing and Sentry, and serves [`app`]; everything else lives here so it
//! can be exercised in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::{HeaderValue, header},
    middleware::from_fn,
    routing::get,
};
use tower::{Layer, ServiceBuilder};
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::middleware::{
    create_session_layer, request_id_middleware, route_guard_middleware,
    security_headers_middleware,
};
use crate::state::AppState;

/// Directory served under `/static`.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Cache policy for static files, which are cache-busted by content hash.
const STATIC_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
///
/// Layers, outermost first: trailing-slash trimming, Sentry, tracing, request
/// ID, security headers, session, route guard. Trimming wraps the router
/// itself so routing and the guard both see `/health` for `/health/`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let session_layer = create_session_layer(state.config());

    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
        .service(ServeDir::new(STATIC_DIR));

    let router = Router::new()
        .route("/healthz", get(healthz))
        .merge(routes::routes())
        .fallback(routes::not_found::not_found)
        .layer(from_fn(route_guard_middleware))
        .layer(session_layer)
        .nest_service("/static", static_files)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Liveness check. Returns "ok" while the server is running.
async fn healthz() -> &'static str {
    "ok"
}
