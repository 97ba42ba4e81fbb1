//! Analyze command: CEFR level, IELTS band, and vocabulary estimate.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use essay_lens_core::analyzer::Assessment;
use essay_lens_core::config::Config;
use essay_lens_core::{AnalysisReport, ScoringModel, analyze, check_input_length};

use super::InputArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Scoring model (defaults to the configured model).
    #[arg(long, value_enum)]
    pub model: Option<ScoringModel>,

    /// Number of vocabulary words to list.
    #[arg(long)]
    pub sample_size: Option<usize>,
}

/// Estimate proficiency for a file, `--text`, or stdin.
#[instrument(name = "cmd_analyze", skip_all, fields(input = %args.input.label()))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let model = args.model.unwrap_or(config.model);
    debug!(%model, sample_size = ?args.sample_size, "executing analyze command");

    let label = args.input.label();
    let content = args.input.load(config.input_limit())?;
    check_input_length(&content, config.min_input_chars_for(model))
        .with_context(|| format!("cannot analyze {label}"))?;

    let mut options = config.analysis_options(model);
    if args.sample_size.is_some() {
        options.sample_size = args.sample_size;
    }

    let report = analyze(&content, &options).with_context(|| format!("failed to analyze {label}"))?;

    if global_json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_report(label, &report);
    }

    Ok(())
}

fn print_report(label: &str, report: &AnalysisReport) {
    println!("{}", label.bold());

    let metrics = &report.metrics;
    println!(
        "\n  {} {} words, {} sentences, {:.2} words/sentence",
        "Metrics:".cyan(),
        metrics.total_words,
        metrics.total_sentences,
        metrics.average_words_per_sentence,
    );
    if let (Some(syllables), Some(per_word)) =
        (metrics.total_syllables, metrics.average_syllables_per_word)
    {
        println!(
            "  {} {} syllables, {:.2} per word",
            "Syllables:".cyan(),
            syllables,
            per_word,
        );
    }

    if let Some(ref readability) = report.scientific_readability {
        println!(
            "\n  {} Grade {:.1} ({})",
            "Readability:".cyan(),
            readability.flesch_kincaid_grade_level,
            readability.reading_level_description,
        );
    }

    let assessment = &report.assessment;
    println!(
        "\n  {} {}",
        "CEFR level:".cyan(),
        assessment.cefr_level().green().bold()
    );
    println!("  {} {}", "IELTS band:".cyan(), assessment.ielts_band().green());

    let heading = match assessment {
        Assessment::Analysis(_) => "Advanced vocabulary:",
        Assessment::ProficiencyAnalysis(_) => "Academic vocabulary:",
    };
    let sample = assessment.vocabulary_sample();
    if sample.is_empty() {
        println!("\n  {} {}", heading.cyan(), "none".dimmed());
    } else {
        println!(
            "\n  {} {} distinct, e.g. {}",
            heading.cyan(),
            assessment.vocabulary_count(),
            sample.join(", "),
        );
    }
}
