//! Style selector and the string transform each style applies.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::random::RandomSource;

const VOWELS: &[&str] = &["a", "e", "i", "o", "u"];

static LOWER_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[aeiou]").expect("vowel pattern is valid"));

/// Naming style requested for the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Names are kept as drawn.
    Modern,
    /// Lowercased.
    Minimalist,
    /// Trailing "o" or "y".
    Playful,
    /// Trailing "Pro" or "Hub".
    Professional,
    /// Lowercase vowels re-rolled.
    Creative,
    /// Trailing "X" or "Z".
    Tech,
}

impl Style {
    pub const ALL: [Self; 6] = [
        Self::Modern,
        Self::Minimalist,
        Self::Playful,
        Self::Professional,
        Self::Creative,
        Self::Tech,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Minimalist => "minimalist",
            Self::Playful => "playful",
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Tech => "tech",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Minimalist => "Minimalist",
            Self::Playful => "Playful",
            Self::Professional => "Professional",
            Self::Creative => "Creative",
            Self::Tech => "Tech",
        }
    }

    /// Resolve a tag. Case and surrounding whitespace are ignored; empty or
    /// unknown tags give `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|style| style.as_str() == tag)
    }

    /// Apply this style to one candidate name.
    pub fn apply<R: RandomSource>(self, name: &str, rng: &mut R) -> String {
        match self {
            Self::Modern => name.to_string(),
            Self::Minimalist => name.to_lowercase(),
            Self::Playful => format!("{name}{}", if rng.coin() { "o" } else { "y" }),
            Self::Professional => format!("{name}{}", if rng.coin() { "Pro" } else { "Hub" }),
            Self::Creative => LOWER_VOWEL
                .replace_all(name, |_: &Captures<'_>| {
                    rng.choose(VOWELS).copied().unwrap_or("a")
                })
                .into_owned(),
            Self::Tech => format!("{name}{}", if rng.coin() { "X" } else { "Z" }),
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
