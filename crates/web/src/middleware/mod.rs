//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transactions)
//! 2. `TraceLayer` (request spans)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, no-store)
//! 5. Session layer (tower-sessions with in-memory store)
//! 6. Route guard (redirects by authentication phase)

pub mod guard;
pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod store;

pub use guard::route_guard_middleware;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use store::{SessionStore, keys};
