//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust,ignore
//! use proptest_fakefactory::prelude::*;
//! ```

pub use proptest::prelude::*;

pub use crate::error::ConfigurationError;
pub use crate::factory::{FakeFactory, FakeFactoryConfig, fake};
pub use crate::law::strategy::{
    assert_draws_vary, assert_eq_hash_consistent, assert_falsifiable, assert_produces_values,
    assert_reproducible, assert_usable_as_map_key, falsify,
};
pub use crate::locale::{Locale, LocaleSpec};
pub use crate::provider::{FakeRng, GeneratorFn, Provider, random_digit, random_number};
