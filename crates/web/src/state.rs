//! Application state shared across handlers.

use std::sync::Arc;

use chrono::Utc;

use crate::config::WebConfig;
use crate::content::ContentStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is immutable; everything
/// that changes per user lives in the browser session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    content: ContentStore,
}

impl AppState {
    /// Create application state with the built-in content.
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        Self::with_content(config, ContentStore::builtin(Utc::now()))
    }

    #[must_use]
    pub fn with_content(config: WebConfig, content: ContentStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, content }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the page content.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}
