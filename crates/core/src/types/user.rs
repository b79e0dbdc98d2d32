//! The signed-in user profile.

use serde::{Deserialize, Serialize};

use super::{Email, LanguageCode};

/// Profile of the signed-in user.
///
/// There is no credential check anywhere: users are synthesised from what
/// was typed into the login or signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: Email,
    /// Short label shown in the avatar circle (two upper-case characters).
    pub avatar: String,
    /// Topic tags chosen during onboarding, in selection order, no duplicates.
    pub interests: Vec<String>,
    pub language: LanguageCode,
}

impl User {
    /// A user who logged in with only an email; named after the local part.
    #[must_use]
    pub fn from_email(email: Email, language: LanguageCode) -> Self {
        Self {
            name: email.local_part().to_owned(),
            avatar: avatar_label(email.as_str()),
            email,
            interests: Vec::new(),
            language,
        }
    }

    /// A user who signed up with a name.
    #[must_use]
    pub fn from_signup(name: &str, email: Email, language: LanguageCode) -> Self {
        let name = name.trim();
        Self {
            name: name.to_owned(),
            avatar: avatar_label(name),
            email,
            interests: Vec::new(),
            language,
        }
    }

    /// First word of the name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Replace interests, dropping blanks and repeats but keeping order.
    pub(crate) fn set_interests<I, S>(&mut self, interests: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests.clear();
        for interest in interests {
            let interest = interest.as_ref().trim();
            if !interest.is_empty() && !self.interests.iter().any(|i| i == interest) {
                self.interests.push(interest.to_owned());
            }
        }
    }
}

/// First two characters, upper-cased.
fn avatar_label(source: &str) -> String {
    source.chars().take(2).flat_map(char::to_uppercase).collect()
}
