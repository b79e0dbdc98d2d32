//! Display preferences that survive login and logout.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::LanguageCode;

/// Error returned when a font size name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown font size {0:?} (expected normal, large or extra-large)")]
pub struct FontSizeError(pub String);

/// Text size chosen in the accessibility settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// All sizes in the order the settings page offers them.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Large, Self::ExtraLarge];

    /// The wire/form name: `normal`, `large` or `extra-large`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }

    /// Button label shown in the settings page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "A",
            Self::Large => "A+",
            Self::ExtraLarge => "A++",
        }
    }

    /// Class applied to the document root, if any.
    #[must_use]
    pub const fn root_class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Large => Some("font-size-large"),
            Self::ExtraLarge => Some("font-size-extra-large"),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FontSize {
    type Err = FontSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s.trim())
            .ok_or_else(|| FontSizeError(s.to_owned()))
    }
}

/// Language and theme preferences.
///
/// These are process-wide for a browser session and independent of who is
/// logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    pub(crate) language: LanguageCode,
    pub(crate) dark_mode: bool,
    pub(crate) high_contrast: bool,
    pub(crate) font_size: FontSize,
}

impl Preferences {
    /// Default preferences with the given starting language.
    #[must_use]
    pub fn with_language(language: LanguageCode) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn language(&self) -> &LanguageCode {
        &self.language
    }

    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub const fn high_contrast(&self) -> bool {
        self.high_contrast
    }

    #[must_use]
    pub const fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Space-separated classes for the document root element.
    ///
    /// ```
    /// use sherise_core::Preferences;
    ///
    /// assert_eq!(Preferences::default().root_classes(), "");
    /// ```
    #[must_use]
    pub fn root_classes(&self) -> String {
        let mut classes = Vec::with_capacity(3);
        if self.dark_mode {
            classes.push("dark");
        }
        if self.high_contrast {
            classes.push("high-contrast");
        }
        if let Some(class) = self.font_size.root_class() {
            classes.push(class);
        }
        classes.join(" ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_parse() {
        assert_eq!("normal".parse::<FontSize>().unwrap(), FontSize::Normal);
        assert_eq!("large".parse::<FontSize>().unwrap(), FontSize::Large);
        assert_eq!(
            "extra-large".parse::<FontSize>().unwrap(),
            FontSize::ExtraLarge
        );
        assert!("huge".parse::<FontSize>().is_err());
    }

    #[test]
    fn test_font_size_serde_uses_kebab_case() {
        let json = serde_json::to_string(&FontSize::ExtraLarge).unwrap();
        assert_eq!(json, "\"extra-large\"");
    }

    #[test]
    fn test_root_classes() {
        let prefs = Preferences {
            language: LanguageCode::english(),
            dark_mode: true,
            high_contrast: true,
            font_size: FontSize::ExtraLarge,
        };
        assert_eq!(
            prefs.root_classes(),
            "dark high-contrast font-size-extra-large"
        );

        let prefs = Preferences {
            font_size: FontSize::Large,
            ..Preferences::default()
        };
        assert_eq!(prefs.root_classes(), "font-size-large");
    }
}
