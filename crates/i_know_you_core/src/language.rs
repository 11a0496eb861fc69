//! Display language codes.

use tracing::instrument;

/// A supported display language.
///
/// The string form (`"tr"`, `"en"`, `"ru"`) is the value persisted to
/// storage; [`str::parse`] accepts exactly those three literals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum LanguageCode {
    /// Turkish
    #[strum(serialize = "tr")]
    Tr,
    /// English (the default)
    #[default]
    #[strum(serialize = "en")]
    En,
    /// Russian
    #[strum(serialize = "ru")]
    Ru,
}

impl LanguageCode {
    /// Returns all languages in picker order.
    #[instrument]
    pub fn all() -> &'static [LanguageCode] {
        &[Self::Tr, Self::En, Self::Ru]
    }

    /// Returns the language's own name for itself.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tr => "Türkçe",
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    /// Returns the flag glyph shown next to the label.
    #[instrument]
    pub fn flag(self) -> &'static str {
        match self {
            Self::Tr => "🇹🇷",
            Self::En => "🇬🇧",
            Self::Ru => "🇷🇺",
        }
    }

    /// Parses a persisted value, returning `None` for anything that is not
    /// one of the three codes.
    #[instrument]
    pub fn from_stored(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}
