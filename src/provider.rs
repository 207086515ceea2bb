//! Pluggable generator methods.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::locale::Locale;

/// RNG handed to every generator method. Seeded once per draw.
pub type FakeRng = StdRng;

/// A named zero-argument generator: given the draw's RNG and locale, produce a value.
pub type GeneratorFn = fn(&mut FakeRng, Locale) -> String;

/// A set of extra generator methods added to a factory's generator.
///
/// Providers are identified by [`Provider::name`]; two factories with the same method and
/// locales are equal when their providers have the same names in the same order.
///
/// ```rust
/// use proptest_fakefactory::provider::{random_number, FakeRng, GeneratorFn, Provider};
/// use proptest_fakefactory::locale::Locale;
///
/// #[derive(Debug)]
/// struct KittenProvider;
///
/// fn kittens(rng: &mut FakeRng, _: Locale) -> String {
///     format!("meow {}", random_number(rng, 10))
/// }
///
/// impl Provider for KittenProvider {
///     fn methods(&self) -> Vec<(&'static str, GeneratorFn)> {
///         vec![("kittens", kittens as GeneratorFn)]
///     }
/// }
/// ```
pub trait Provider: fmt::Debug + Send + Sync + 'static {
    /// Stable identity used for equality and hashing.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Methods this provider contributes.
    fn methods(&self) -> Vec<(&'static str, GeneratorFn)>;
}

/// Random non-negative integer with at most `digits` decimal digits.
pub fn random_number(rng: &mut FakeRng, digits: u32) -> u64 {
    let digits = digits.min(19);
    if digits == 0 {
        return 0;
    }
    rng.random_range(0..10_u64.pow(digits))
}

/// Random decimal digit.
pub fn random_digit(rng: &mut FakeRng) -> u8 {
    rng.random_range(0..10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[derive(Debug)]
    struct Named;

    impl Provider for Named {
        fn methods(&self) -> Vec<(&'static str, GeneratorFn)> {
            Vec::new()
        }
    }

    #[test]
    fn default_name_is_type_path() {
        assert!(Named.name().ends_with("Named"));
        let boxed: Box<dyn Provider> = Box::new(Named);
        assert_eq!(boxed.name(), Named.name());
    }

    #[test]
    fn random_number_respects_digit_count() {
        let mut rng = FakeRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(random_number(&mut rng, 3) < 1000);
            assert!(random_digit(&mut rng) < 10);
        }
        assert_eq!(random_number(&mut rng, 0), 0);
        let _ = random_number(&mut rng, 40);
    }
}
