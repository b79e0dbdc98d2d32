//! SheRise Core - session state, route gating and translations.
//!
//! This crate holds everything about the application that can be decided
//! without a browser or an HTTP server:
//! - [`store`] - the session/preferences store and its operations
//! - [`guard`] - the pure route guard `resolve(phase, path)`
//! - [`route`] - the static page table
//! - [`i18n`] - translation lookup with language fallback
//! - [`types`] - validated newtypes (email, language code, font size, money)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. The `sherise-web` crate loads a [`Store`] from the
//! browser session, runs [`resolve`] before every handler, and renders pages
//! through a [`Translator`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod guard;
pub mod i18n;
pub mod route;
pub mod store;
pub mod types;

pub use guard::{Guard, Phase, Resolution, resolve};
pub use i18n::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES, Translator, has_translation, translate};
pub use route::Route;
pub use store::{AuthState, Store};
pub use types::*;
