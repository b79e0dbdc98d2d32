//! Language code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`LanguageCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// The input is empty.
    #[error("language code cannot be empty")]
    Empty,
    /// The input is longer than a language tag we accept.
    #[error("language code must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains something other than ASCII letters, digits or `-`.
    #[error("language code contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A language code such as `en` or `hi`.
///
/// Any well-formed code is accepted, including ones without a translation
/// table; lookups for those fall back to the default language. Codes are
/// normalised to lowercase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Longest accepted code (`zh-hant-tw` style tags are not needed).
    pub const MAX_LENGTH: usize = 8;

    /// Parse a language code.
    ///
    /// # Errors
    ///
    /// Returns a [`LanguageError`] if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`], or contains characters outside `[A-Za-z0-9-]`.
    pub fn parse(s: &str) -> Result<Self, LanguageError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LanguageError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(LanguageError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if let Some(c) = s.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
            return Err(LanguageError::InvalidCharacter(c));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// The English code, used as the default language.
    #[must_use]
    pub fn english() -> Self {
        Self("en".to_owned())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
