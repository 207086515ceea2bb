//! # proptest-fakefactory
//!
//! `proptest-fakefactory` turns named methods of the `fake` data library into proptest
//! strategies:
//! - `factory`: [`FakeFactory`], validated eagerly and usable as a map key
//! - `locale`: supported locales and [`LocaleSpec`]
//! - `provider`: custom generator methods via [`Provider`]
//! - `registry`: built-in methods and generator resolution
//! - `law::strategy`: strategy conformance assertions and [`strategy_test_suite!`]
//!
//! ```rust,ignore
//! use proptest_fakefactory::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn french_names(name in FakeFactory::builder("name").locale("fr_FR").build().unwrap()) {
//!         prop_assert!(!name.is_empty());
//!     }
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod error;
pub mod factory;
pub mod law;
pub mod locale;
pub mod prelude;
pub mod provider;
pub mod registry;

pub use error::ConfigurationError;
pub use factory::{FakeFactory, FakeFactoryBuilder, FakeFactoryConfig, fake};
pub use locale::{Locale, LocaleSpec};
pub use provider::{FakeRng, GeneratorFn, Provider};

/// Re-export `proptest` for convenience.
pub use proptest;
