//! Static word lists that make up the base pool.
//!
//! Invented brand names in the vein of Clarq, Sage, Emma, Sonnie or Cluely.

/// Short four-letter names.
const SHORT: &[&str] = &[
    "Qlix", "Vexo", "Zura", "Kliq", "Nexu", "Ryze", "Flux", "Onyx",
    "Apex", "Prox", "Zeal", "Vibe", "Echo", "Nova", "Luma", "Koda",
    "Fixa", "Valo", "Mira", "Trix", "Lyra", "Axel", "Vera", "Zeta",
];

/// Names ending in -ly / -li / -ify style suffixes.
const SUFFIXED: &[&str] = &[
    "Clariq", "Sagely", "Emmix", "Sonify", "Cluety", "Veraly", "Nexify",
    "Fluxly", "Vixely", "Rythmly", "Prestly", "Questly", "Swiftly", "Craftly",
    "Brightli", "Smartli", "Quickli", "Sleekly", "Freshli", "Cleanli",
];

/// Names modelled on current app naming (-r, -x, -ly).
const MODERN: &[&str] = &[
    "Clarix", "Sagex", "Emmly", "Sonnix", "Cluex", "Verax", "Nexar",
    "Fluxr", "Vixly", "Rythr", "Presto", "Questo", "Swiftr", "Craftr",
    "Brightr", "Smartr", "Quickr", "Sleekr", "Freshr", "Cleanr",
];

/// Names with reshuffled vowels and playful endings.
const CREATIVE: &[&str] = &[
    "Claroq", "Sageo", "Emmax", "Sonniq", "Cluexa", "Veralo", "Nexaro",
    "Fluxeo", "Vixaro", "Rythmo", "Prestiq", "Questax", "Swiftex", "Craftex",
    "Brightex", "Smartex", "Quickex", "Sleekex", "Freshex", "Cleanex",
];

/// Category of a base-pool word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Short,
    Suffixed,
    Modern,
    Creative,
}

impl WordCategory {
    /// Every category, in pool order.
    pub const ALL: [Self; 4] = [Self::Short, Self::Suffixed, Self::Modern, Self::Creative];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Suffixed => "suffixed",
            Self::Modern => "modern",
            Self::Creative => "creative",
        }
    }

    /// The names in this category.
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Short => SHORT,
            Self::Suffixed => SUFFIXED,
            Self::Modern => MODERN,
            Self::Creative => CREATIVE,
        }
    }
}

impl std::fmt::Display for WordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All categories flattened into one list, in category order.
pub fn base_pool() -> Vec<&'static str> {
    WordCategory::ALL
        .iter()
        .flat_map(|category| category.words().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_pool_is_union_of_categories() {
        let pool = base_pool();
        let expected: usize = WordCategory::ALL.iter().map(|c| c.words().len()).sum();
        assert_eq!(pool.len(), expected);
        assert_eq!(pool.len(), 84);
        assert_eq!(pool.first(), Some(&"Qlix"));
        assert_eq!(pool.last(), Some(&"Cleanex"));
    }

    #[test]
    fn test_words_are_non_empty_and_unique() {
        let pool = base_pool();
        let unique: std::collections::HashSet<_> = pool.iter().collect();
        assert_eq!(unique.len(), pool.len());
        assert!(pool.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(WordCategory::Suffixed.to_string(), "suffixed");
        assert!(WordCategory::Short.words().contains(&"Vexo"));
    }
}
