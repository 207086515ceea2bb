//! Strategy conformance laws.
//!
//! Each assertion drives a strategy through proptest's [`TestRunner`] directly, so it can be
//! called from plain `#[test]` functions. [`strategy_test_suite!`](crate::strategy_test_suite)
//! bundles them into a generated test module.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};

const DEFAULT_SEED: [u8; 32] = [0x5a; 32];

/// Runner whose RNG is fully determined by `seed`. Failures are never persisted.
#[must_use]
pub fn seeded_runner(seed: [u8; 32]) -> TestRunner {
    let mut config = Config::default();
    config.failure_persistence = None;
    TestRunner::new_with_rng(config, TestRng::from_seed(RngAlgorithm::ChaCha, &seed))
}

/// Draw `count` values. Panics if the strategy rejects generation.
pub fn draw_values<S>(strategy: &S, runner: &mut TestRunner, count: usize) -> Vec<S::Value>
where
    S: Strategy,
{
    (0..count)
        .map(|attempt| match strategy.new_tree(runner) {
            Ok(tree) => tree.current(),
            Err(reason) => panic!(
                "strategy {strategy:?} failed on draw {attempt}: {}",
                reason.message()
            ),
        })
        .collect()
}

/// Assert the strategy produces `count` values.
pub fn assert_produces_values<S>(strategy: &S, count: usize) -> Vec<S::Value>
where
    S: Strategy,
{
    assert!(count > 0, "count must be > 0");
    let values = draw_values(strategy, &mut seeded_runner(DEFAULT_SEED), count);
    assert_eq!(values.len(), count);
    values
}

/// Assert `count` draws are not all the same value.
pub fn assert_draws_vary<S>(strategy: &S, count: usize)
where
    S: Strategy,
    S::Value: PartialEq + Debug,
{
    assert!(count > 1, "count must be > 1");
    let values = draw_values(strategy, &mut seeded_runner(DEFAULT_SEED), count);
    assert!(
        values.iter().any(|value| *value != values[0]),
        "{count} draws all produced {:?}",
        values[0]
    );
}

/// Assert two runners seeded identically produce identical draws.
pub fn assert_reproducible<S>(strategy: &S, seed: [u8; 32], count: usize)
where
    S: Strategy,
    S::Value: PartialEq + Debug,
{
    let first = draw_values(strategy, &mut seeded_runner(seed), count);
    let second = draw_values(strategy, &mut seeded_runner(seed), count);
    assert_eq!(first, second, "same seed should reproduce the same draws");
}

/// Search up to `max_draws` values for one that violates `holds`.
pub fn falsify<S, P>(strategy: &S, holds: P, max_draws: usize) -> Option<S::Value>
where
    S: Strategy,
    P: Fn(&S::Value) -> bool,
{
    let mut runner = seeded_runner(DEFAULT_SEED);
    (0..max_draws).find_map(|_| {
        let value = strategy.new_tree(&mut runner).ok()?.current();
        (!holds(&value)).then_some(value)
    })
}

/// Assert a counterexample to `holds` exists within `max_draws` and return it.
pub fn assert_falsifiable<S, P>(strategy: &S, holds: P, max_draws: usize) -> S::Value
where
    S: Strategy,
    P: Fn(&S::Value) -> bool,
{
    match falsify(strategy, holds, max_draws) {
        Some(value) => value,
        None => panic!("no counterexample found for {strategy:?} in {max_draws} draws"),
    }
}

/// Assert a property that never holds is falsified by the first draw.
pub fn assert_finds_constant_failure<S>(strategy: &S)
where
    S: Strategy,
{
    let mut runner = seeded_runner(DEFAULT_SEED);
    let result = runner.run(strategy, |_| {
        Err(proptest::test_runner::TestCaseError::fail("always fails"))
    });
    assert!(result.is_err(), "a constantly failing property should be reported");
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Assert `a == b` and that they hash identically.
pub fn assert_eq_hash_consistent<T>(a: &T, b: &T)
where
    T: Eq + Hash + Debug,
{
    assert_eq!(a, b, "values should be equal");
    assert_eq!(hash_of(a), hash_of(b), "equal values should hash identically: {a:?}");
}

/// Assert a clone equals the original and can look itself up in a map.
pub fn assert_usable_as_map_key<T>(value: &T)
where
    T: Clone + Eq + Hash + Debug,
{
    let copy = value.clone();
    assert_eq_hash_consistent(value, &copy);
    let map = HashMap::from([(copy, 1_u8)]);
    assert_eq!(map.get(value), Some(&1), "{value:?} should find itself as a key");
}

/// Assert the strategy describes itself with non-empty text.
pub fn assert_describable<T: Display>(value: &T) {
    assert!(!value.to_string().trim().is_empty(), "description should not be empty");
}

/// Generate a test module running the standard strategy conformance checks against
/// `$strategy`, which must be `Strategy + Clone + Eq + Hash + Display` with a
/// `PartialEq + Debug` value type.
///
/// ```rust,ignore
/// proptest_fakefactory::strategy_test_suite!(fake_email, FakeFactory::new("email").unwrap());
/// ```
#[macro_export]
macro_rules! strategy_test_suite {
    ($suite:ident, $strategy:expr) => {
        mod $suite {
            #[allow(unused_imports)]
            use super::*;
            use $crate::law::strategy as law;

            #[test]
            fn produces_values() {
                let _ = law::assert_produces_values(&$strategy, 64);
            }

            #[test]
            fn draws_vary() {
                law::assert_draws_vary(&$strategy, 64);
            }

            #[test]
            fn same_seed_reproduces() {
                law::assert_reproducible(&$strategy, [7; 32], 16);
            }

            #[test]
            fn finds_constant_failure() {
                law::assert_finds_constant_failure(&$strategy);
            }

            #[test]
            fn clone_is_equal_and_usable_as_key() {
                law::assert_usable_as_map_key(&$strategy);
            }

            #[test]
            fn can_describe() {
                law::assert_describable(&$strategy);
            }
        }
    };
}
