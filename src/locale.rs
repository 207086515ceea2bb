//! Locales known to the fake data registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A language/region data set provided by [`fake::locales`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// American English; also the data used when no locale is given.
    EnUs,
    /// French (France).
    FrFr,
    /// German (Germany).
    DeDe,
    /// Portuguese (Brazil).
    PtBr,
    /// Simplified Chinese.
    ZhCn,
    /// Traditional Chinese.
    ZhTw,
    /// Japanese.
    JaJp,
    /// Arabic (Saudi Arabia).
    ArSa,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 8] = [
        Locale::EnUs,
        Locale::FrFr,
        Locale::DeDe,
        Locale::PtBr,
        Locale::ZhCn,
        Locale::ZhTw,
        Locale::JaJp,
        Locale::ArSa,
    ];

    /// Canonical identifier, e.g. `"fr_FR"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::FrFr => "fr_FR",
            Locale::DeDe => "de_DE",
            Locale::PtBr => "pt_BR",
            Locale::ZhCn => "zh_CN",
            Locale::ZhTw => "zh_TW",
            Locale::JaJp => "ja_JP",
            Locale::ArSa => "ar_SA",
        }
    }

    /// Look up a locale identifier. Accepts the canonical form and the bare `"en"` alias.
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        if name == "en" {
            return Ok(Locale::EnUs);
        }
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == name)
            .ok_or_else(|| ConfigurationError::UnsupportedLocale(name.to_owned()))
    }

    /// Whether `name` is a recognised identifier.
    #[must_use]
    pub fn is_supported(name: &str) -> bool {
        Self::parse(name).is_ok()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.as_str().to_owned()
    }
}

/// Which locale data a factory draws from.
///
/// `Default` and `Single(Locale::EnUs)` draw from the same data but are distinct requests,
/// so factories built from them compare unequal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum LocaleSpec {
    /// No locale requested.
    #[default]
    Default,
    /// Exactly one locale.
    Single(Locale),
    /// Each draw picks one of these uniformly.
    Multiple(Vec<Locale>),
}

impl LocaleSpec {
    /// Build from the two optional request fields, enforcing that at most one is set and that
    /// every name is supported.
    pub fn from_request(
        locale: Option<&str>,
        locales: Option<&[String]>,
    ) -> Result<Self, ConfigurationError> {
        match (locale, locales) {
            (Some(_), Some(_)) => Err(ConfigurationError::LocaleConflict),
            (Some(name), None) => Ok(LocaleSpec::Single(Locale::parse(name)?)),
            (None, Some([])) => Err(ConfigurationError::EmptyLocales),
            (None, Some(names)) => names
                .iter()
                .map(|name| Locale::parse(name))
                .collect::<Result<Vec<_>, _>>()
                .map(LocaleSpec::Multiple),
            (None, None) => Ok(LocaleSpec::Default),
        }
    }

    /// Locales a draw may pick from. Empty only for a `Multiple(vec![])`, which
    /// [`FakeFactory::with_spec`](crate::FakeFactory::with_spec) rejects.
    #[must_use]
    pub fn candidates(&self) -> &[Locale] {
        match self {
            LocaleSpec::Default => &[Locale::EnUs],
            LocaleSpec::Single(locale) => std::slice::from_ref(locale),
            LocaleSpec::Multiple(locales) => locales,
        }
    }
}
