//! Construction errors.

use thiserror::Error;

/// Invalid fake factory request. Every failure is detected when the factory is built,
/// never when a value is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `locale` and `locales` were both supplied.
    #[error("both locale and locales specified")]
    LocaleConflict,
    /// A locale identifier is not known to the fake data registry.
    #[error("unsupported locale {0:?}")]
    UnsupportedLocale(String),
    /// `locales` was supplied but empty.
    #[error("locales must name at least one locale")]
    EmptyLocales,
    /// No generator method with this name exists.
    #[error("unsupported method {0:?}")]
    UnsupportedMethod(String),
    /// The method name uses the private `_` prefix.
    #[error("private method {0:?} cannot be used")]
    PrivateMethod(String),
    /// A JSON request could not be parsed.
    #[error("invalid fake factory config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
