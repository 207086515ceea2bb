//! Law/invariant assertion helpers.

pub mod strategy;
