//! CLI command execution.
//!
//! Plays the part of the form: validates the description, waits out the
//! pause, runs the generator and prints what came back.

use std::fmt::Write as _;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::{debug, warn};

use crate::models::{GenerationRecord, GenerationRequest};
use crate::names::{Industry, NameGenerator, RandomSource, Style};

use super::args::{Cli, Commands, GenerateArgs};

/// Execute the CLI command.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Generate(args)) => generate(args).await,
        Some(Commands::Industries) => {
            print!("{}", render_industries());
            Ok(())
        }
        Some(Commands::Styles) => {
            print!("{}", render_styles());
            Ok(())
        }
        None if cli.generate.is_empty() => {
            Cli::command().print_help().context("Failed to print help")?;
            Ok(())
        }
        None => generate(cli.generate).await,
    }
}

/// Validate, then run every requested round.
async fn generate(args: GenerateArgs) -> Result<()> {
    let request = GenerationRequest::new(args.description.join(" "), args.industry, args.style);
    request.validate()?;
    warn_unknown_tags(&request);

    let delay = Duration::from_millis(args.delay_ms);
    let mut generator = NameGenerator::new();

    for round in 1..=args.rounds {
        let names = run_round(&mut generator, &request, delay).await;

        if args.json {
            let record = GenerationRecord::new(&request, names);
            let json = serde_json::to_string_pretty(&record).context("Failed to serialize record")?;
            println!("{json}");
        } else {
            if args.rounds > 1 {
                println!("Round {round}/{}", args.rounds);
            }
            print!("{}", render_names(&names));
        }
    }

    Ok(())
}

/// One round: pause, then generate.
pub async fn run_round<R: RandomSource>(
    generator: &mut NameGenerator<R>,
    request: &GenerationRequest,
    delay: Duration,
) -> Vec<String> {
    if !delay.is_zero() {
        debug!(?delay, "Waiting before generation");
        tokio::time::sleep(delay).await;
    }
    generator.generate(&request.description, request.industry(), request.style())
}

fn warn_unknown_tags(request: &GenerationRequest) {
    if let Some(tag) = request.industry.as_deref() {
        if request.industry().is_none() {
            warn!("Unknown industry '{tag}', generating without one");
        }
    }
    if let Some(tag) = request.style.as_deref() {
        if request.style().is_none() {
            warn!("Unknown style '{tag}', names are left unstyled");
        }
    }
}

/// Numbered list plus a summary line.
fn render_names(names: &[String]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {name}", i + 1);
    }
    let noun = if names.len() == 1 { "name" } else { "names" };
    let _ = writeln!(out, "{} {noun} generated for your project.", names.len());
    out
}

fn render_industries() -> String {
    let mut out = String::new();
    for industry in Industry::ALL {
        let _ = writeln!(out, "  {:<14}{}", industry.as_str(), industry.label());
    }
    out
}

fn render_styles() -> String {
    let mut out = String::new();
    for style in Style::ALL {
        let _ = writeln!(out, "  {:<14}{}", style.as_str(), style.label());
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use clap::Parser;

    use super::*;
    use crate::error::ValidationError;
    use crate::names::ScriptedRandom;

    #[tokio::test]
    async fn test_run_round_scripted() {
        let mut generator =
            NameGenerator::with_pool(vec!["Qlix", "Vexo"], ScriptedRandom::constant(0.99));
        let request = GenerationRequest::new("a team chat", None, Some("modern".into()));
        let names = run_round(&mut generator, &request, Duration::ZERO).await;
        assert_eq!(names, vec!["Qlix", "Vexo"]);
    }

    #[tokio::test]
    async fn test_run_round_waits() {
        let mut generator = NameGenerator::new();
        let request = GenerationRequest::new("x", Some("tech".into()), Some("tech".into()));
        let start = Instant::now();
        let names = run_round(&mut generator, &request, Duration::from_millis(30)).await;
        assert!(start.elapsed() >= Duration::from_millis(30));
        assert!(names.iter().all(|n| n.ends_with('X') || n.ends_with('Z')));
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_description() {
        let cli = Cli::parse_from(["namecraft", "generate", "--delay-ms", "0", "   "]);
        let err = execute(cli).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyDescription)
        );
    }

    #[tokio::test]
    async fn test_execute_tags_without_description() {
        let cli = Cli::parse_from(["namecraft", "--industry", "tech", "--delay-ms", "0"]);
        let err = execute(cli).await.unwrap_err();
        assert!(err.to_string().contains("description is required"));
    }

    #[tokio::test]
    async fn test_execute_generates() {
        let cli = Cli::parse_from([
            "namecraft",
            "--delay-ms",
            "0",
            "--rounds",
            "2",
            "--industry",
            "space",
            "rocket",
            "tracker",
        ]);
        assert!(execute(cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_listings() {
        assert!(execute(Cli::parse_from(["namecraft", "industries"])).await.is_ok());
        assert!(execute(Cli::parse_from(["namecraft", "styles"])).await.is_ok());
    }

    #[test]
    fn test_render_names() {
        let out = render_names(&["Qlix".to_string(), "Vexo".to_string()]);
        assert_eq!(out, "  1. Qlix\n  2. Vexo\n2 names generated for your project.\n");
        assert_eq!(render_names(&[]), "0 names generated for your project.\n");
    }

    #[test]
    fn test_render_listings() {
        let industries = render_industries();
        assert_eq!(industries.lines().count(), Industry::ALL.len());
        assert!(industries.contains("ecommerce     E-commerce"));

        let styles = render_styles();
        assert_eq!(styles.lines().count(), Style::ALL.len());
        assert!(styles.lines().next().unwrap().contains("modern"));
    }
}
