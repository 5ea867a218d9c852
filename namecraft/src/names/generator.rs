//! The name generator.
//!
//! Draws a handful of base names, optionally swaps the tail for
//! industry-flavoured names, runs the style transform over everything and
//! returns the distinct results.

use std::collections::HashSet;

use tracing::debug;

use super::catalog::base_pool;
use super::industry::Industry;
use super::random::{RandomSource, ThreadRandom};
use super::style::Style;

/// Tunables for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Base names drawn from the pool (default: 8).
    pub base_draw: usize,

    /// Base names kept when contextual names are added (default: 6).
    pub base_keep: usize,

    /// Industry keywords turned into contextual names (default: 4).
    pub contextual_count: usize,

    /// Upper bound on the returned list (default: 12).
    pub max_results: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            base_draw: 8,
            base_keep: 6,
            contextual_count: 4,
            max_results: 12,
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn base_draw(mut self, count: usize) -> Self {
        self.base_draw = count;
        self
    }

    pub const fn base_keep(mut self, count: usize) -> Self {
        self.base_keep = count;
        self
    }

    pub const fn contextual_count(mut self, count: usize) -> Self {
        self.contextual_count = count;
        self
    }

    pub const fn max_results(mut self, count: usize) -> Self {
        self.max_results = count;
        self
    }
}

/// Generates candidate brand names from a base pool.
#[derive(Debug, Clone)]
pub struct NameGenerator<R = ThreadRandom> {
    pool: Vec<&'static str>,
    options: GeneratorOptions,
    rng: R,
}

impl NameGenerator<ThreadRandom> {
    /// Generator over the full word catalog with the thread RNG.
    pub fn new() -> Self {
        Self::with_rng(ThreadRandom)
    }
}

impl Default for NameGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> NameGenerator<R> {
    /// Generator over the full word catalog.
    pub fn with_rng(rng: R) -> Self {
        Self::with_pool(base_pool(), rng)
    }

    /// Generator over a caller-supplied base pool.
    pub fn with_pool(pool: Vec<&'static str>, rng: R) -> Self {
        Self {
            pool,
            options: GeneratorOptions::default(),
            rng,
        }
    }

    #[must_use]
    pub fn options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pool(&self) -> &[&'static str] {
        &self.pool
    }

    /// Generate names.
    ///
    /// `description` is accepted for the caller's benefit but has no effect
    /// on the output. The result holds at most `max_results` distinct names.
    pub fn generate(
        &mut self,
        _description: &str,
        industry: Option<Industry>,
        style: Option<Style>,
    ) -> Vec<String> {
        let mut candidates: Vec<String> = self
            .rng
            .sample(&self.pool, self.options.base_draw)
            .into_iter()
            .map(String::from)
            .collect();

        if let Some(industry) = industry {
            let contextual =
                industry.contextual_names(self.options.contextual_count, &mut self.rng);
            candidates.truncate(self.options.base_keep);
            candidates.extend(contextual);
        }

        if let Some(style) = style {
            candidates = candidates
                .iter()
                .map(|name| style.apply(name, &mut self.rng))
                .collect();
        }

        let drawn = candidates.len();
        let names = dedup_first(candidates, self.options.max_results);
        debug!(
            industry = industry.map(Industry::as_str),
            style = style.map(Style::as_str),
            drawn,
            returned = names.len(),
            "Generated names"
        );
        names
    }

    /// Generate names from raw tags.
    ///
    /// Empty or unknown tags behave as if no industry/style had been given.
    pub fn generate_tagged(
        &mut self,
        description: &str,
        industry: &str,
        style: &str,
    ) -> Vec<String> {
        let resolved_industry = Industry::from_tag(industry);
        if resolved_industry.is_none() && !industry.trim().is_empty() {
            debug!(tag = industry, "Ignoring unknown industry");
        }

        let resolved_style = Style::from_tag(style);
        if resolved_style.is_none() && !style.trim().is_empty() {
            debug!(tag = style, "Ignoring unknown style");
        }

        self.generate(description, resolved_industry, resolved_style)
    }
}

/// Drop repeats (exact match), keep first-seen order, cap at `limit`.
fn dedup_first(names: Vec<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .take(limit)
        .collect()
}
