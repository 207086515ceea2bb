//! `FakeFactory`: a proptest strategy drawing from a named fake data method.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use proptest::prelude::*;
use proptest::strategy::{NewTree, ValueTree};
use proptest::test_runner::TestRunner;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::locale::LocaleSpec;
use crate::provider::{FakeRng, GeneratorFn, Provider};
use crate::registry::Generator;

/// Serializable factory request. Providers are code and are attached through
/// [`FakeFactory::builder`] or [`FakeFactory::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FakeFactoryConfig {
    /// Generator method name, e.g. `"email"`.
    pub method: String,
    /// Single locale identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Locale identifiers, one picked per draw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,
}

impl FakeFactoryConfig {
    /// Request `method` with the default locale.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the single locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the locale list.
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = Some(locales.into_iter().map(Into::into).collect());
        self
    }
}

/// Builder pairing a [`FakeFactoryConfig`] with providers.
#[derive(Debug, Clone)]
pub struct FakeFactoryBuilder {
    config: FakeFactoryConfig,
    providers: Vec<Arc<dyn Provider>>,
}

impl FakeFactoryBuilder {
    /// Set the single locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config = self.config.with_locale(locale);
        self
    }

    /// Set the locale list.
    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_locales(locales);
        self
    }

    /// Add a provider.
    pub fn provider(mut self, provider: impl Provider) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Add an already shared provider.
    pub fn shared_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<FakeFactory, ConfigurationError> {
        FakeFactory::from_config(&self.config, self.providers)
    }
}

/// Strategy producing values from one fake data method.
///
/// Construction fails eagerly with [`ConfigurationError`]; once built, every draw succeeds.
/// Equality and hashing consider only the request (method, locales, provider names).
///
/// ```rust,ignore
/// use proptest::prelude::*;
/// use proptest_fakefactory::FakeFactory;
///
/// proptest! {
///     #[test]
///     fn emails(email in FakeFactory::new("email").unwrap()) {
///         prop_assert!(email.contains('@'));
///     }
/// }
/// ```
#[derive(Clone)]
pub struct FakeFactory {
    method: String,
    locales: LocaleSpec,
    providers: Vec<Arc<dyn Provider>>,
    generate: GeneratorFn,
}

impl FakeFactory {
    /// Factory for `method` with the default locale and no providers.
    pub fn new(method: impl Into<String>) -> Result<Self, ConfigurationError> {
        Self::with_spec(method, LocaleSpec::Default, Vec::new())
    }

    /// Start a builder for `method`.
    pub fn builder(method: impl Into<String>) -> FakeFactoryBuilder {
        FakeFactoryBuilder {
            config: FakeFactoryConfig::new(method),
            providers: Vec::new(),
        }
    }

    /// Validate a request: locale exclusivity, locale support, then method lookup.
    pub fn from_config(
        config: &FakeFactoryConfig,
        providers: Vec<Arc<dyn Provider>>,
    ) -> Result<Self, ConfigurationError> {
        let locales = LocaleSpec::from_request(config.locale.as_deref(), config.locales.as_deref())
            .inspect_err(|err| {
                tracing::debug!(method = %config.method, error = %err, "rejected fake factory locales");
            })?;
        Self::with_spec(config.method.clone(), locales, providers)
    }

    /// Build from an already typed locale selection.
    pub fn with_spec(
        method: impl Into<String>,
        locales: LocaleSpec,
        providers: Vec<Arc<dyn Provider>>,
    ) -> Result<Self, ConfigurationError> {
        let method = method.into();
        if matches!(&locales, LocaleSpec::Multiple(list) if list.is_empty()) {
            tracing::debug!(method = %method, error = %ConfigurationError::EmptyLocales, "rejected fake factory locales");
            return Err(ConfigurationError::EmptyLocales);
        }
        let generator = Generator::new(&providers);
        let generate = generator.method(&method).inspect_err(|err| {
            tracing::debug!(method = %method, error = %err, "rejected fake factory method");
        })?;

        let factory = Self {
            method,
            locales,
            providers,
            generate,
        };
        tracing::debug!(factory = %factory, "resolved fake factory");
        Ok(factory)
    }

    /// Method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Locale selection.
    #[must_use]
    pub fn locale_spec(&self) -> &LocaleSpec {
        &self.locales
    }

    /// Provider names, in registration order.
    pub fn provider_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|provider| provider.name())
    }

    /// Draw one value using `rng`.
    pub fn draw(&self, rng: &mut FakeRng) -> String {
        let candidates = self.locales.candidates();
        let locale = match candidates {
            [only] => *only,
            many => many[rng.random_range(0..many.len())],
        };
        (self.generate)(rng, locale)
    }

    /// Draw the value determined by `seed`.
    #[must_use]
    pub fn sample(&self, seed: u64) -> String {
        self.draw(&mut FakeRng::seed_from_u64(seed))
    }

    /// Human-readable description of the request.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn key(&self) -> (&str, &LocaleSpec, Vec<&'static str>) {
        (&self.method, &self.locales, self.provider_names().collect())
    }
}

impl PartialEq for FakeFactory {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FakeFactory {}

impl Hash for FakeFactory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for FakeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FakeFactory({:?}", self.method)?;
        match &self.locales {
            LocaleSpec::Default => {}
            LocaleSpec::Single(locale) => write!(f, ", locale={:?}", locale.as_str())?,
            LocaleSpec::Multiple(locales) => {
                let names: Vec<&str> = locales.iter().map(|locale| locale.as_str()).collect();
                write!(f, ", locales={names:?}")?;
            }
        }
        if !self.providers.is_empty() {
            let names: Vec<&str> = self.provider_names().collect();
            write!(f, ", providers={names:?}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for FakeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeFactory")
            .field("method", &self.method)
            .field("locales", &self.locales)
            .field("providers", &self.provider_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Value tree for a single fake draw. Fake values have no meaningful simpler form, so it
/// never shrinks.
#[derive(Debug, Clone)]
pub struct FakeValueTree {
    value: String,
}

impl ValueTree for FakeValueTree {
    type Value = String;

    fn current(&self) -> String {
        self.value.clone()
    }

    fn simplify(&mut self) -> bool {
        false
    }

    fn complicate(&mut self) -> bool {
        false
    }
}

impl Strategy for FakeFactory {
    type Tree = FakeValueTree;
    type Value = String;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let seed = any::<u64>().new_tree(runner)?.current();
        Ok(FakeValueTree {
            value: self.sample(seed),
        })
    }
}

/// Convenience: `fake("email")` is `FakeFactory::new("email")`.
pub fn fake(method: &str) -> Result<FakeFactory, ConfigurationError> {
    FakeFactory::new(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use std::collections::HashMap;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(factory: &FakeFactory) -> u64 {
        let mut hasher = DefaultHasher::new();
        factory.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn rejects_invalid_requests() {
        let both = FakeFactory::builder("name")
            .locale("fr_FR")
            .locales(["fr_FR", "en_US"])
            .build();
        assert_eq!(both.err(), Some(ConfigurationError::LocaleConflict));

        let bad = FakeFactory::builder("name").locale("badger_BADGER").build();
        assert!(matches!(bad, Err(ConfigurationError::UnsupportedLocale(_))));

        assert!(matches!(
            FakeFactory::new("spoon"),
            Err(ConfigurationError::UnsupportedMethod(_))
        ));
        assert!(matches!(
            FakeFactory::new("_Generator__config"),
            Err(ConfigurationError::PrivateMethod(_))
        ));
        assert_eq!(
            FakeFactory::with_spec("name", LocaleSpec::Multiple(vec![]), Vec::new()).err(),
            Some(ConfigurationError::EmptyLocales)
        );
    }

    #[test]
    fn locale_errors_win_over_method_errors() {
        let err = FakeFactory::builder("spoon").locale("badger_BADGER").build();
        assert!(matches!(err, Err(ConfigurationError::UnsupportedLocale(_))));
    }

    #[test]
    fn equality_and_hashing_follow_the_request() {
        let email = FakeFactory::new("email").unwrap();
        let email_en = FakeFactory::builder("email").locale("en_US").build().unwrap();

        assert_eq!(email, FakeFactory::new("email").unwrap());
        assert_ne!(email, FakeFactory::new("name").unwrap());
        assert_ne!(email, email_en);
        assert_eq!(hash_of(&email), hash_of(&FakeFactory::new("email").unwrap()));

        let mut by_factory = HashMap::new();
        by_factory.insert(email.clone(), 1);
        by_factory.insert(email_en.clone(), 2);
        assert_eq!(by_factory[&email], 1);
        assert_eq!(by_factory[&email_en], 2);
    }

    #[test]
    fn sample_is_deterministic_per_seed() {
        let factory = FakeFactory::builder("name")
            .locales(["fr_FR", "de_DE"])
            .build()
            .unwrap();
        assert_eq!(factory.sample(99), factory.sample(99));
    }

    #[test]
    fn describe_lists_request() {
        let factory = FakeFactory::builder("name")
            .locales(["fr_FR", "en_US"])
            .build()
            .unwrap();
        assert_eq!(
            factory.describe(),
            r#"FakeFactory("name", locales=["fr_FR", "en_US"])"#
        );
        assert_eq!(
            FakeFactory::new("email").unwrap().to_string(),
            r#"FakeFactory("email")"#
        );
    }

    #[test]
    fn config_parses_from_json() {
        let config = FakeFactoryConfig::from_json(r#"{"method":"name","locale":"fr_FR"}"#).unwrap();
        assert_eq!(config, FakeFactoryConfig::new("name").with_locale("fr_FR"));
        let factory = FakeFactory::from_config(&config, Vec::new()).unwrap();
        assert_eq!(factory.locale_spec(), &LocaleSpec::Single(Locale::FrFr));

        assert!(matches!(
            FakeFactoryConfig::from_json("{"),
            Err(ConfigurationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn config_rejects_misspelled_keys() {
        let err = FakeFactoryConfig::from_json(r#"{"method":"name","locle":"badger_BADGER"}"#)
            .unwrap_err();
        assert!(matches!(&err, ConfigurationError::InvalidConfig(msg) if msg.contains("locle")));
    }

    proptest! {
        #[test]
        fn emails_contain_at(email in fake("email").unwrap()) {
            prop_assert!(email.contains('@'));
        }
    }
}
