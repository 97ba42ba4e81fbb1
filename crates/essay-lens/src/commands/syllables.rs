//! Syllables command: per-word syllable estimates.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use essay_lens_core::syllables::{self, WordSyllables};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words or phrases to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Serialize)]
struct SyllablesOutput {
    words: Vec<WordSyllables>,
    total: usize,
}

/// Print the estimated syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let words = syllables::estimate_words(&args.words.join(" "));
    if words.is_empty() {
        anyhow::bail!("no words found in input");
    }
    let output = SyllablesOutput {
        total: words.iter().map(|w| w.syllables).sum(),
        words,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for entry in &output.words {
            println!("{} {}", entry.word.bold(), entry.syllables);
        }
        if output.words.len() > 1 {
            println!("{} {}", "total".dimmed(), output.total);
        }
    }

    Ok(())
}
