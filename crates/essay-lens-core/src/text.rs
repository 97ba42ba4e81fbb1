//! Tokenization into words and sentences.
//!
//! Both splitters are naive: words are runs of ASCII letters that touch no
//! other letter, digit, or underscore, and sentences are whatever lies between runs
//! of `.`, `!`, or `?`. Abbreviations, decimals, and URLs are not special-cased.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{AnalysisError, AnalysisResult};

/// A maximal run of ASCII letters. It only counts as a word when neither
/// neighbour is a word character (see [`WORD_CHAR`]).
static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("valid regex"));

/// Characters that glue onto a letter run: letters, numerics, and `_`.
///
/// Combining marks are not word characters and superscript digits are, so
/// `cafe\u{301}` yields `cafe` while `x²` yields nothing. The regex crate's
/// own `\b` classifies both the other way round, hence the explicit check.
static WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}_]$").expect("valid regex"));

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// One or more consecutive sentence terminators.
static TERMINATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Words and sentences extracted from one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// Lowercase words in input order, duplicates kept.
    pub words: Vec<String>,
    /// Trimmed, non-empty sentences in input order.
    pub sentences: Vec<String>,
}

impl Tokens {
    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Split text into words and sentences, rejecting degenerate input.
///
/// # Errors
///
/// Returns [`AnalysisError::NoContent`] when the text yields no words or
/// no sentences (for example `"..."` or `"12 34 56"`).
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> AnalysisResult<Tokens> {
    let words = extract_words(text);
    let sentences = split_sentences(text);

    tracing::debug!(
        words = words.len(),
        sentences = sentences.len(),
        "tokenized input"
    );

    if words.is_empty() || sentences.is_empty() {
        return Err(AnalysisError::NoContent);
    }

    Ok(Tokens { words, sentences })
}

/// Extract lowercase words from text.
pub fn extract_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    LETTER_RUN
        .find_iter(&lowered)
        .filter(|m| {
            let before = lowered[..m.start()].chars().next_back();
            let after = lowered[m.end()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences on runs of `.`, `!`, and `?`.
///
/// Text without any terminator is a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    TERMINATOR_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased_letter_runs() {
        let words = extract_words("Hello, World! This is a TEST.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(extract_words("don't stop"), vec!["don", "t", "stop"]);
        assert_eq!(extract_words("well-known"), vec!["well", "known"]);
    }

    #[test]
    fn letters_glued_to_digits_are_not_words() {
        assert_eq!(extract_words("abc123 def 4ghi jkl"), vec!["def", "jkl"]);
        assert!(extract_words("snake_case").is_empty());
    }

    #[test]
    fn non_ascii_letters_break_words() {
        // é is a word character, so "café" has no boundary after "caf".
        assert_eq!(extract_words("café au lait"), vec!["au", "lait"]);
    }

    #[test]
    fn combining_marks_are_not_word_characters() {
        assert_eq!(
            extract_words("The cafe\u{301} is nice."),
            vec!["the", "cafe", "is", "nice"]
        );
    }

    #[test]
    fn superscript_digits_are_word_characters() {
        assert_eq!(extract_words("Area is x² here."), vec!["area", "is", "here"]);
        assert_eq!(extract_words("Room ½way"), vec!["room"]);
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences, vec!["This is a sentence", "This is another sentence"]);
    }

    #[test]
    fn terminator_runs_are_one_delimiter() {
        let sentences = split_sentences("Really?! Yes... Fine!!!");
        assert_eq!(sentences, vec!["Really", "Yes", "Fine"]);
    }

    #[test]
    fn abbreviations_are_split() {
        let sentences = split_sentences("Dr. Smith went home.");
        assert_eq!(sentences, vec!["Dr", "Smith went home"]);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(split_sentences("  no ending here  "), vec!["no ending here"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("...!?").is_empty());
    }

    #[test]
    fn tokenize_counts() {
        let tokens = tokenize("The cat sat. It was happy.").unwrap();
        assert_eq!(tokens.words, vec!["the", "cat", "sat", "it", "was", "happy"]);
        assert_eq!(tokens.word_count(), 6);
        assert_eq!(tokens.sentence_count(), 2);
    }

    #[test]
    fn punctuation_only_has_no_content() {
        assert_eq!(tokenize("..."), Err(AnalysisError::NoContent));
        assert_eq!(tokenize("   "), Err(AnalysisError::NoContent));
    }

    #[test]
    fn digits_only_has_no_content() {
        // Sentences exist, but no words do.
        assert_eq!(tokenize("123 456. 789!"), Err(AnalysisError::NoContent));
    }
}
