//! Industry selector and its keyword sets.

use super::random::RandomSource;

/// Suffixes appended to industry keywords to build contextual names.
pub const CONTEXT_SUFFIXES: &[&str] = &["ly", "ify", "x", "r", "o", "a", "i"];

/// Industry the project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Tech,
    Finance,
    Healthcare,
    Education,
    Ecommerce,
    Marketing,
    Productivity,
    Creative,
}

impl Industry {
    pub const ALL: [Self; 8] = [
        Self::Tech,
        Self::Finance,
        Self::Healthcare,
        Self::Education,
        Self::Ecommerce,
        Self::Marketing,
        Self::Productivity,
        Self::Creative,
    ];

    /// Tag used on the command line and in JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Ecommerce => "ecommerce",
            Self::Marketing => "marketing",
            Self::Productivity => "productivity",
            Self::Creative => "creative",
        }
    }

    /// Display label shown in listings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tech => "Technology",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Ecommerce => "E-commerce",
            Self::Marketing => "Marketing",
            Self::Productivity => "Productivity",
            Self::Creative => "Creative",
        }
    }

    /// Resolve a tag. Case and surrounding whitespace are ignored; empty or
    /// unknown tags give `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|industry| industry.as_str() == tag)
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Tech => &[
                "Tech", "Code", "Data", "Cloud", "Dev", "Digital", "Cyber", "AI", "Logic", "Pixel",
            ],
            Self::Finance => &[
                "Pay", "Coin", "Vault", "Cash", "Fund", "Invest", "Crypto", "Bank", "Wallet",
                "Trade",
            ],
            Self::Healthcare => &[
                "Care", "Health", "Med", "Vita", "Cure", "Heal", "Bio", "Life", "Pulse",
                "Wellness",
            ],
            Self::Education => &[
                "Learn", "Study", "Edu", "Mind", "Brain", "Know", "Skill", "Course", "Class",
                "Academy",
            ],
            Self::Ecommerce => &[
                "Shop", "Cart", "Buy", "Sell", "Store", "Market", "Commerce", "Trade", "Retail",
                "Purchase",
            ],
            Self::Marketing => &[
                "Brand", "Promo", "Campaign", "Ads", "Social", "Content", "Influence", "Reach",
                "Engage", "Convert",
            ],
            Self::Productivity => &[
                "Task", "Flow", "Boost", "Focus", "Sync", "Organize", "Plan", "Schedule", "Manage",
                "Optimize",
            ],
            Self::Creative => &[
                "Design", "Art", "Create", "Studio", "Canvas", "Craft", "Make", "Build", "Draw",
                "Sketch",
            ],
        }
    }

    /// Draw up to `count` distinct keywords and give each a random suffix.
    pub fn contextual_names<R: RandomSource>(self, count: usize, rng: &mut R) -> Vec<String> {
        let keywords = self.keywords();
        rng.sample(keywords, count.min(keywords.len()))
            .into_iter()
            .map(|keyword| {
                let suffix = rng.choose(CONTEXT_SUFFIXES).copied().unwrap_or("ly");
                format!("{keyword}{suffix}")
            })
            .collect()
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
