//! Random source used by the name generator.
//!
//! The generator never touches an ambient RNG directly; it draws from a
//! [`RandomSource`] so callers (and tests) decide where randomness comes from.

use rand::Rng;

/// A source of uniformly distributed floats.
///
/// Only [`next_float`](Self::next_float) must be implemented. The sampling
/// helpers are derived from it so a scripted source drives every decision
/// the generator makes.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() called with an empty range");
        let scaled = (self.next_float() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.next_float() > 0.5
    }

    /// Pick one element uniformly, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len());
        items.get(i)
    }

    /// Draw `count` elements without replacement.
    ///
    /// Shuffles a copy of `items` (Fisher-Yates) and keeps the first `count`.
    /// Asking for more than `items.len()` returns every element.
    fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.index(i + 1);
            shuffled.swap(i, j);
        }
        shuffled.truncate(count);
        shuffled
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }
}

/// Thread-local RNG from `rand`. Not seeded, not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_float(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Replays a fixed list of floats, wrapping around at the end.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, pos: 0 }
    }

    /// Always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_float(&mut self) -> f64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}
