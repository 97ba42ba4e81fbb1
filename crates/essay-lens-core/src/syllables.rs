//! Heuristic syllable estimation.
//!
//! Counts vowel groups with a silent-e and a syllabic "-le" correction. The
//! rules are not phonetically exact and must not be "fixed": irregular
//! spellings come out wrong ("recipe" counts as two, "create" as one), and the
//! proficiency thresholds are tuned against exactly this output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Vowels for syllable counting. `y` always counts.
const VOWELS: &[u8] = b"aeiouy";

/// Words this short are always one syllable.
const SHORT_WORD_MAX_LEN: usize = 3;

fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Estimate the syllable count of one lowercase word.
///
/// Always returns at least 1, including for the empty string.
pub fn count_syllables(word: &str) -> usize {
    let bytes = word.as_bytes();
    if bytes.len() <= SHORT_WORD_MAX_LEN {
        return 1;
    }

    let mut count: isize = isize::from(is_vowel(bytes[0]));

    for pair in bytes.windows(2) {
        if is_vowel(pair[1]) && !is_vowel(pair[0]) {
            count += 1;
        }
    }

    // Silent e
    if word.ends_with('e') {
        count -= 1;
    }

    // Syllabic -le (table, little)
    if word.ends_with("le") && !is_vowel(bytes[bytes.len() - 3]) {
        count += 1;
    }

    usize::try_from(count).map_or(1, |c| c.max(1))
}

/// Sum syllable estimates across words.
pub fn total_syllables<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| count_syllables(w.as_ref())).sum()
}

/// Syllable estimate for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordSyllables {
    /// Lowercase word.
    pub word: String,
    /// Estimated syllables.
    pub syllables: usize,
}

/// Tokenize `text` and estimate each word, keeping order and duplicates.
pub fn estimate_words(text: &str) -> Vec<WordSyllables> {
    text::extract_words(text)
        .into_iter()
        .map(|word| WordSyllables {
            syllables: count_syllables(&word),
            word,
        })
        .collect()
}
