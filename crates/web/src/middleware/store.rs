//! Session store extractor.
//!
//! Loads the [`Store`] for the current browser session, hands it to the
//! handler, and writes it back on [`SessionStore::save`].

use std::ops::{Deref, DerefMut};

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sherise_core::{Store, Translator};
use tower_sessions::Session;

use crate::error::AppError;
use crate::state::AppState;

/// Session keys.
pub mod keys {
    /// The [`sherise_core::Store`].
    pub const STORE: &str = "store";

    /// Community posts written in this session.
    pub const COMMUNITY_POSTS: &str = "community_posts";

    /// Interests ticked during onboarding, before completion.
    pub const ONBOARDING_DRAFT: &str = "onboarding_draft";
}

/// Page-scoped keys cleared on logout.
pub const PAGE_STATE_KEYS: [&str; 2] = [keys::COMMUNITY_POSTS, keys::ONBOARDING_DRAFT];

/// Read the store from a session without falling back to defaults.
///
/// # Errors
///
/// Returns an error if the session backend fails.
pub async fn load_store(session: &Session) -> Result<Option<Store>, AppError> {
    Ok(session.get::<Store>(keys::STORE).await?)
}

/// The session's [`Store`], loaded for one request.
///
/// Dereferences to [`Store`], so reads and operations are called directly.
/// Changes are only kept once [`save`](Self::save) is awaited.
///
/// # Example
///
/// ```rust,ignore
/// async fn toggle(mut store: SessionStore) -> Result<Redirect> {
///     store.toggle_dark_mode();
///     store.save().await?;
///     Ok(Redirect::to("/settings"))
/// }
/// ```
pub struct SessionStore {
    session: Session,
    store: Store,
}

impl SessionStore {
    /// Persist the store to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend fails.
    pub async fn save(&self) -> Result<(), AppError> {
        self.session.insert(keys::STORE, &self.store).await?;
        Ok(())
    }

    /// Translator bound to the session language.
    #[must_use]
    pub fn translator(&self) -> Translator {
        Translator::new(self.store.language().clone())
    }

    /// Read page-scoped state, or its default when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend fails.
    pub async fn page_state<T>(&self, key: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.session.get::<T>(key).await?.unwrap_or_default())
    }

    /// Write page-scoped state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend fails.
    pub async fn set_page_state<T>(&self, key: &str, value: &T) -> Result<(), AppError>
    where
        T: Serialize + Sync,
    {
        self.session.insert(key, value).await?;
        Ok(())
    }

    /// Drop all page-scoped state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend fails.
    pub async fn clear_page_state(&self) -> Result<(), AppError> {
        for key in PAGE_STATE_KEYS {
            self.session.remove_value(key).await?;
        }
        Ok(())
    }
}

impl Deref for SessionStore {
    type Target = Store;

    fn deref(&self) -> &Store {
        &self.store
    }
}

impl DerefMut for SessionStore {
    fn deref_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

impl<S> FromRequestParts<S> for SessionStore
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A missing session means the router was built without the session
        // layer. Carrying on with a fresh store would silently log users out.
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AppError::StoreUnavailable)?;

        let store = match load_store(&session).await? {
            Some(store) => store,
            None => {
                let state = AppState::from_ref(state);
                Store::new(state.config().default_language.clone())
            }
        };

        Ok(Self { session, store })
    }
}
