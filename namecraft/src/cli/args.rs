//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Namecraft - invent short, modern names for apps and SaaS products
#[derive(Parser, Debug)]
#[command(name = "namecraft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Generation options (used when no subcommand is given)
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inputs for a generation run.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Industry tag (see `namecraft industries`); unknown tags are ignored
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Style tag (see `namecraft styles`); unknown tags are ignored
    #[arg(short, long)]
    pub style: Option<String>,

    /// Pause before each round, in milliseconds (0 disables it)
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Number of rounds to generate with the same inputs
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Print each round as a JSON record
    #[arg(long)]
    pub json: bool,

    /// Description of the app or SaaS
    #[arg(trailing_var_arg = true)]
    pub description: Vec<String>,
}

impl GenerateArgs {
    /// Whether any generation input was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.industry.is_none() && self.style.is_none()
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate names (explicit command)
    Generate(GenerateArgs),

    /// List industry tags
    Industries,

    /// List style tags
    Styles,
}
