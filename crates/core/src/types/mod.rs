//! Core types for SheRise.
//!
//! Validated wrappers for the values users hand to the store.

pub mod email;
pub mod language;
pub mod preferences;
pub mod price;
pub mod user;

pub use email::{Email, EmailError};
pub use language::{LanguageCode, LanguageError};
pub use preferences::{FontSize, FontSizeError, Preferences};
pub use price::{CurrencyCode, Price};
pub use user::User;
