//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use essay_lens_core::markdown;

pub mod analyze;
pub mod info;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod syllables;

/// Where a command reads its text from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// File to analyze (reads stdin when neither FILE nor --text is given).
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of a file.
    #[arg(long)]
    pub text: Option<String>,

    /// Treat the input as Markdown and analyze only its prose (implied for `.md` files).
    #[arg(long)]
    pub strip_markdown: bool,
}

impl InputArgs {
    /// Label for messages: the file path, or where the text came from.
    pub fn label(&self) -> &str {
        match (&self.file, &self.text) {
            (Some(path), _) => path.as_str(),
            (None, Some(_)) => "<text>",
            (None, None) => "<stdin>",
        }
    }

    /// Load the input, enforcing `max_bytes`, and strip Markdown when asked to.
    ///
    /// The raw text is size-checked before any Markdown processing.
    pub fn load(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        let raw = match (&self.file, &self.text) {
            (Some(path), _) => read_input_file(path, max_bytes)?,
            (None, Some(text)) => {
                check_size(self.label(), text.len(), max_bytes)?;
                text.clone()
            }
            (None, None) => read_stdin(max_bytes)?,
        };

        let is_markdown =
            self.strip_markdown || self.file.as_ref().is_some_and(|p| p.extension() == Some("md"));
        Ok(if is_markdown {
            markdown::strip_to_prose(&raw)
        } else {
            raw
        })
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_size(path.as_str(), size, max_bytes)?;

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), "<stdin>", max_bytes)
}

/// Read at most one byte past `max_bytes`, size-check, then decode.
///
/// Decoding after the size check keeps a cut inside a multi-byte character
/// from surfacing as a UTF-8 error instead of "input too large".
fn read_limited<R: Read>(
    mut reader: R,
    label: &str,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader.take(cap).read_to_end(&mut bytes)
        }
        None => reader.read_to_end(&mut bytes),
    }
    .with_context(|| format!("failed to read {label}"))?;
    check_size(label, bytes.len(), max_bytes)?;
    String::from_utf8(bytes).with_context(|| format!("{label} is not valid UTF-8"))
}

fn check_size(label: &str, size: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}
