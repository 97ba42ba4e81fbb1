//! Info command implementation

use clap::Args;
use essay_lens_core::config::{Config, ConfigSources};
use essay_lens_core::proficiency::TierThresholds;
use essay_lens_core::vocabulary::VocabularyThresholds;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    model: String,
    sample_size: usize,
    min_input_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    vocabulary: VocabularyThresholds,
    tiers: TierThresholds,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let model = config.model;
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            model: model.as_str().to_string(),
            sample_size: config.analysis_options(model).sample_size(),
            min_input_chars: config.min_input_chars_for(model),
            max_grade: config.max_grade,
            max_input_bytes: config.input_limit(),
            vocabulary: config.vocabulary,
            tiers: config.tiers,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }

    let info = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = info.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), info.log_level);
    if let Some(ref dir) = info.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match info.max_input_bytes {
        Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Analysis".bold().underline());
    println!("{}: {}", "Model".dimmed(), info.model);
    println!("{}: {}", "Sample size".dimmed(), info.sample_size);
    println!("{}: {}", "Min input chars".dimmed(), info.min_input_chars);
    match info.max_grade {
        Some(v) => println!("{}: {:.1}", "Max grade".dimmed(), v),
        None => println!("{}: {}", "Max grade".dimmed(), "(not set)".dimmed()),
    }

    let vocab = &info.vocabulary;
    println!(
        "{}: {}+ letters (ratio), {}+ letters or {}+ letters with {}+ syllables (grade)",
        "Vocabulary".dimmed(),
        vocab.advanced_min_len,
        vocab.academic_min_len,
        vocab.academic_syllable_min_len,
        vocab.academic_min_syllables,
    );
    let tiers = &info.tiers;
    println!(
        "{}: grade {:.1} / {:.1}",
        "Tier bounds".dimmed(),
        tiers.advanced_min_grade,
        tiers.upper_intermediate_min_grade,
    );

    Ok(())
}
