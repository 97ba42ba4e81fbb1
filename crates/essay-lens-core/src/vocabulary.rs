//! Advanced vocabulary detection.
//!
//! Two predicates exist and are never mixed:
//!
//! - [`VocabularyRule::Length`] flags any word of at least 8 letters.
//! - [`VocabularyRule::LengthOrSyllables`] flags words of at least 9 letters,
//!   or at least 7 letters with 3 or more estimated syllables.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables::count_syllables;

/// Minimum length for the length-only rule.
pub const ADVANCED_MIN_LEN: usize = 8;
/// Length at which the syllable-aware rule flags a word outright.
pub const ACADEMIC_MIN_LEN: usize = 9;
/// Minimum length for the syllable branch of the syllable-aware rule.
pub const ACADEMIC_SYLLABLE_MIN_LEN: usize = 7;
/// Minimum syllables for the syllable branch of the syllable-aware rule.
pub const ACADEMIC_MIN_SYLLABLES: usize = 3;

/// Word-level thresholds for both rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VocabularyThresholds {
    /// Length floor for [`VocabularyRule::Length`].
    pub advanced_min_len: usize,
    /// Length floor for [`VocabularyRule::LengthOrSyllables`].
    pub academic_min_len: usize,
    /// Length floor of the syllable branch.
    pub academic_syllable_min_len: usize,
    /// Syllable floor of the syllable branch.
    pub academic_min_syllables: usize,
}

impl Default for VocabularyThresholds {
    fn default() -> Self {
        Self {
            advanced_min_len: ADVANCED_MIN_LEN,
            academic_min_len: ACADEMIC_MIN_LEN,
            academic_syllable_min_len: ACADEMIC_SYLLABLE_MIN_LEN,
            academic_min_syllables: ACADEMIC_MIN_SYLLABLES,
        }
    }
}

/// Which predicate decides that a word is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyRule {
    /// Length only.
    Length,
    /// Length, or shorter words with many syllables.
    LengthOrSyllables,
}

impl VocabularyRule {
    /// Whether `word` counts as advanced under this rule.
    pub fn matches(self, word: &str, thresholds: &VocabularyThresholds) -> bool {
        let len = word.len();
        match self {
            Self::Length => len >= thresholds.advanced_min_len,
            Self::LengthOrSyllables => {
                len >= thresholds.academic_min_len
                    || (len >= thresholds.academic_syllable_min_len
                        && count_syllables(word) >= thresholds.academic_min_syllables)
            }
        }
    }
}

/// Distinct advanced words found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyReport {
    /// Number of distinct advanced words.
    pub count: usize,
    /// First distinct advanced words in order of appearance, at most the
    /// requested sample size.
    pub sample: Vec<String>,
}

/// Collect the distinct advanced words in `words`.
///
/// `sample_size` bounds only [`VocabularyReport::sample`]; the count always
/// covers every distinct match.
#[tracing::instrument(skip(words, thresholds), fields(words = words.len()))]
pub fn classify<S: AsRef<str>>(
    words: &[S],
    rule: VocabularyRule,
    thresholds: &VocabularyThresholds,
    sample_size: usize,
) -> VocabularyReport {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut sample = Vec::new();

    for word in words.iter().map(AsRef::as_ref) {
        if seen.contains(word) || !rule.matches(word, thresholds) {
            continue;
        }
        seen.insert(word);
        if sample.len() < sample_size {
            sample.push(word.to_string());
        }
    }

    tracing::debug!(count = seen.len(), "classified vocabulary");
    VocabularyReport {
        count: seen.len(),
        sample,
    }
}
