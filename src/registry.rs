//! Generator resolution: built-in methods backed by `fake`, extended by providers.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, PostCode, SecondaryAddress, StateName, StreetName,
    ZipCode,
};
use fake::faker::company::raw::{
    Bs, CatchPhrase, CompanyName, CompanySuffix, Industry, Profession,
};
use fake::faker::internet::raw::{
    DomainSuffix, FreeEmail, IPv4, IPv6, Password, SafeEmail, UserAgent, Username,
};
use fake::faker::job::raw::Title as JobTitle;
use fake::faker::lorem::raw::{Paragraph, Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName, Name, NameWithTitle, Suffix, Title};
use fake::faker::phone_number::raw::{CellNumber, PhoneNumber};
use fake::locales::{AR_SA, DE_DE, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};

use crate::error::ConfigurationError;
use crate::locale::Locale;
use crate::provider::{FakeRng, GeneratorFn, Provider};

/// Evaluate `$body` with `$l` bound to the `fake` locale marker for `$locale`.
macro_rules! with_locale {
    ($locale:expr, $l:ident => $body:expr) => {
        match $locale {
            Locale::EnUs => {
                let $l = EN;
                $body
            }
            Locale::FrFr => {
                let $l = FR_FR;
                $body
            }
            Locale::DeDe => {
                let $l = DE_DE;
                $body
            }
            Locale::PtBr => {
                let $l = PT_BR;
                $body
            }
            Locale::ZhCn => {
                let $l = ZH_CN;
                $body
            }
            Locale::ZhTw => {
                let $l = ZH_TW;
                $body
            }
            Locale::JaJp => {
                let $l = JA_JP;
                $body
            }
            Locale::ArSa => {
                let $l = AR_SA;
                $body
            }
        }
    };
}

/// Build `(name, GeneratorFn)` pairs from faker constructors taking the locale first.
macro_rules! fakers {
    ($($method:literal => $faker:ident $(($($arg:expr),*))?),* $(,)?) => {
        vec![$(
            (
                $method,
                (|rng: &mut FakeRng, locale: Locale| -> String {
                    with_locale!(locale, l => $faker(l $($(, $arg)*)?).fake_with_rng::<String, _>(rng))
                }) as GeneratorFn,
            )
        ),*]
    };
}

fn street_address(rng: &mut FakeRng, locale: Locale) -> String {
    with_locale!(locale, l => {
        let number: String = BuildingNumber(l).fake_with_rng(rng);
        let street: String = StreetName(l).fake_with_rng(rng);
        format!("{number} {street}")
    })
}

static BUILTINS: LazyLock<BTreeMap<&'static str, GeneratorFn>> = LazyLock::new(|| {
    let mut methods: BTreeMap<&'static str, GeneratorFn> = fakers![
        "name" => Name,
        "first_name" => FirstName,
        "last_name" => LastName,
        "prefix" => Title,
        "suffix" => Suffix,
        "name_with_title" => NameWithTitle,
        "email" => SafeEmail,
        "safe_email" => SafeEmail,
        "free_email" => FreeEmail,
        "user_name" => Username,
        "password" => Password(8..20),
        "domain_suffix" => DomainSuffix,
        "ipv4" => IPv4,
        "ipv6" => IPv6,
        "user_agent" => UserAgent,
        "city" => CityName,
        "country" => CountryName,
        "street_name" => StreetName,
        "state" => StateName,
        "zipcode" => ZipCode,
        "postcode" => PostCode,
        "building_number" => BuildingNumber,
        "secondary_address" => SecondaryAddress,
        "phone_number" => PhoneNumber,
        "cell_number" => CellNumber,
        "company" => CompanyName,
        "company_suffix" => CompanySuffix,
        "catch_phrase" => CatchPhrase,
        "bs" => Bs,
        "industry" => Industry,
        "profession" => Profession,
        "job" => JobTitle,
        "word" => Word,
        "sentence" => Sentence(4..10),
        "paragraph" => Paragraph(3..6),
    ]
    .into_iter()
    .collect();
    methods.insert("street_address", street_address);
    methods
});

/// Names of the built-in methods, sorted.
pub fn builtin_methods() -> impl Iterator<Item = &'static str> {
    BUILTINS.keys().copied()
}

/// Whether `method` uses the private naming convention.
#[must_use]
pub fn is_private(method: &str) -> bool {
    method.starts_with('_')
}

/// A generator instance: the built-ins plus every provider's methods. Later providers shadow
/// earlier providers and built-ins.
#[derive(Clone)]
pub struct Generator {
    methods: BTreeMap<&'static str, GeneratorFn>,
}

impl Generator {
    /// Resolve a generator extended with `providers`.
    pub fn new(providers: &[Arc<dyn Provider>]) -> Self {
        let mut methods = BUILTINS.clone();
        for provider in providers {
            methods.extend(provider.methods());
        }
        Self { methods }
    }

    /// Find the public method called `method`.
    pub fn method(&self, method: &str) -> Result<GeneratorFn, ConfigurationError> {
        if is_private(method) {
            return Err(ConfigurationError::PrivateMethod(method.to_owned()));
        }
        self.methods
            .get(method)
            .copied()
            .ok_or_else(|| ConfigurationError::UnsupportedMethod(method.to_owned()))
    }

    /// Public method names, sorted.
    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied().filter(|name| !is_private(name))
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.methods.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[derive(Debug)]
    struct Shadowing;

    fn constant(_: &mut FakeRng, _: Locale) -> String {
        "shadowed".to_owned()
    }

    impl Provider for Shadowing {
        fn methods(&self) -> Vec<(&'static str, GeneratorFn)> {
            vec![("email", constant as GeneratorFn), ("_hidden", constant)]
        }
    }

    #[test]
    fn rejects_private_and_unknown_names() {
        let generator = Generator::new(&[]);
        assert_eq!(
            generator.method("_Generator__config").err(),
            Some(ConfigurationError::PrivateMethod("_Generator__config".into()))
        );
        assert_eq!(
            generator.method("spoon").err(),
            Some(ConfigurationError::UnsupportedMethod("spoon".into()))
        );
    }

    #[test]
    fn providers_shadow_builtins_but_not_privacy() {
        let generator = Generator::new(&[Arc::new(Shadowing) as Arc<dyn Provider>]);
        let method = generator.method("email").unwrap();
        let mut rng = FakeRng::seed_from_u64(1);
        assert_eq!(method(&mut rng, Locale::EnUs), "shadowed");
        assert!(generator.method("_hidden").is_err());
        assert!(generator.method_names().all(|name| name != "_hidden"));
    }

    #[test]
    fn every_builtin_resolves_in_every_locale() {
        let generator = Generator::new(&[]);
        let mut rng = FakeRng::seed_from_u64(42);
        for name in builtin_methods() {
            let method = generator.method(name).unwrap();
            for locale in Locale::ALL {
                let _ = method(&mut rng, locale);
            }
        }
        let name = generator.method("name").unwrap();
        assert!(!name(&mut rng, Locale::FrFr).is_empty());
    }
}
