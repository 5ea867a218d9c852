//! Brand-name generation engine.
//!
//! Everything here is in-memory and synchronous. Randomness comes in through
//! [`RandomSource`] so results can be scripted in tests.

mod catalog;
mod generator;
mod industry;
mod random;
mod style;

pub use catalog::{base_pool, WordCategory};
pub use generator::{GeneratorOptions, NameGenerator};
pub use industry::{Industry, CONTEXT_SUFFIXES};
pub use random::{RandomSource, ThreadRandom};
pub use style::Style;

#[cfg(test)]
pub use random::ScriptedRandom;
