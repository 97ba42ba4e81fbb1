//! Readability command: Flesch-Kincaid Grade Level scoring.

use anyhow::{Context, bail};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use essay_lens_core::config::Config;
use essay_lens_core::readability;

use super::InputArgs;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,
}

/// Score readability using Flesch-Kincaid Grade Level.
#[instrument(name = "cmd_readability", skip_all, fields(input = %args.input.label()))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(max_grade = ?args.max_grade, "executing readability command");

    let label = args.input.label();
    let content = args.input.load(config.input_limit())?;
    let max_grade = args.max_grade.or(config.max_grade);

    let report = readability::check_readability(&content, max_grade)
        .with_context(|| format!("failed to check readability of {label}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.over_max {
        let max = report.max_grade.unwrap_or(0.0);
        bail!(
            "{label} scores {:.1} (max: {max:.1}). Shorten sentences or use simpler words.",
            report.grade,
        );
    } else if let Some(max) = report.max_grade {
        println!(
            "{} {label} scores {:.1} (max: {max:.1})",
            "PASS:".green(),
            report.grade,
        );
    } else {
        println!("{:.1} {}", report.grade, report.description.dimmed());
    }

    Ok(())
}
