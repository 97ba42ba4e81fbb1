//! Readability scoring using Flesch-Kincaid Grade Level.
//!
//! Formula: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! The grade is floored at zero and rounded to one decimal place before it is
//! reported or mapped to a proficiency tier.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::syllables;
use crate::text;

const WORDS_PER_SENTENCE_WEIGHT: f64 = 0.39;
const SYLLABLES_PER_WORD_WEIGHT: f64 = 11.8;
const GRADE_OFFSET: f64 = 15.59;

/// Averages and grade level for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScore {
    /// Unrounded words per sentence.
    pub avg_words_per_sentence: f64,
    /// Unrounded syllables per word.
    pub avg_syllables_per_word: f64,
    /// Flesch-Kincaid Grade Level, floored at 0 and rounded to 1 decimal.
    pub grade: f64,
}

impl ReadabilityScore {
    /// Human-readable description of the grade.
    pub fn description(&self) -> &'static str {
        ReadingLevel::from_grade(self.grade).description()
    }
}

/// Coarse school-level band for a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingLevel {
    /// Grade below 6.
    Elementary,
    /// Grade 6 to below 9.
    MiddleSchool,
    /// Grade 9 to below 12.
    HighSchool,
    /// Grade 12 to below 16.
    College,
    /// Grade 16 and above.
    Graduate,
}

impl ReadingLevel {
    /// Band containing `grade`. Lower bounds are inclusive.
    pub fn from_grade(grade: f64) -> Self {
        if grade >= 16.0 {
            Self::Graduate
        } else if grade >= 12.0 {
            Self::College
        } else if grade >= 9.0 {
            Self::HighSchool
        } else if grade >= 6.0 {
            Self::MiddleSchool
        } else {
            Self::Elementary
        }
    }

    /// Label used in reports.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary school",
            Self::MiddleSchool => "Middle school",
            Self::HighSchool => "High school",
            Self::College => "College",
            Self::Graduate => "Graduate / academic",
        }
    }
}

/// Result of a standalone readability check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch-Kincaid Grade Level score.
    pub grade: f64,
    /// School-level description of the grade.
    pub description: String,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the grade exceeds the maximum.
    pub over_max: bool,
}

/// Tokenize `text` and score it, optionally against a maximum grade.
///
/// # Errors
///
/// Returns [`AnalysisError::NoContent`] if the text has no words or sentences.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(text: &str, max_grade: Option<f64>) -> AnalysisResult<ReadabilityReport> {
    let tokens = text::tokenize(text)?;
    let syllables = syllables::total_syllables(&tokens.words);
    let score = score(tokens.word_count(), tokens.sentence_count(), syllables)?;

    Ok(ReadabilityReport {
        grade: score.grade,
        description: score.description().to_string(),
        sentences: tokens.sentence_count(),
        words: tokens.word_count(),
        syllables,
        max_grade,
        over_max: max_grade.is_some_and(|max| score.grade > max),
    })
}

/// Score word, sentence, and syllable totals.
///
/// # Errors
///
/// [`AnalysisError::NoContent`] if `words` or `sentences` is zero, and
/// [`AnalysisError::Internal`] if the grade is not a finite number.
#[tracing::instrument]
pub fn score(words: usize, sentences: usize, syllables: usize) -> AnalysisResult<ReadabilityScore> {
    if words == 0 || sentences == 0 {
        return Err(AnalysisError::NoContent);
    }

    let avg_words_per_sentence = words as f64 / sentences as f64;
    let avg_syllables_per_word = syllables as f64 / words as f64;
    // Unfused: each step rounds, so near-.x5 grades round the same way as the
    // plain textbook formula.
    #[allow(clippy::suboptimal_flops)]
    let raw = WORDS_PER_SENTENCE_WEIGHT * avg_words_per_sentence
        + SYLLABLES_PER_WORD_WEIGHT * avg_syllables_per_word
        - GRADE_OFFSET;

    if !raw.is_finite() {
        return Err(AnalysisError::Internal(format!(
            "grade level is not finite: {raw}"
        )));
    }

    // Comparison instead of f64::max so a rounded -0.0 also becomes +0.0.
    let rounded = round_to(raw, 1);
    let grade = if rounded > 0.0 { rounded } else { 0.0 };
    tracing::debug!(raw, grade, "scored readability");

    Ok(ReadabilityScore {
        avg_words_per_sentence,
        avg_syllables_per_word,
        grade,
    })
}

/// Round to `places` decimals using the exact decimal value of the float.
///
/// Goes through decimal formatting so that values such as `8.95` (stored as
/// `8.9499…`) round down, matching decimal-aware rounding elsewhere.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_counts() {
        let s = score(100, 5, 150).unwrap();
        assert_eq!(s.avg_words_per_sentence, 20.0);
        assert_eq!(s.avg_syllables_per_word, 1.5);
        assert_eq!(s.grade, 9.9);
    }

    #[test]
    fn grade_rounds_like_stepwise_arithmetic() {
        assert_eq!(score(36, 1, 36).unwrap().grade, 10.3);
        assert_eq!(score(38, 3, 76).unwrap().grade, 12.9);
        assert_eq!(score(46, 1, 92).unwrap().grade, 26.0);
    }

    #[test]
    #[allow(clippy::suboptimal_flops)]
    fn grade_matches_formula_across_counts() {
        for words in 1..=80_usize {
            for sentences in 1..=words {
                for syllables in words..=3 * words {
                    let a = words as f64 / sentences as f64;
                    let b = syllables as f64 / words as f64;
                    let expected = round_to(0.39 * a + 11.8 * b - 15.59, 1);
                    let expected = if expected > 0.0 { expected } else { 0.0 };
                    let got = score(words, sentences, syllables).unwrap().grade;
                    assert_eq!(got, expected, "{words}/{sentences}/{syllables}");
                }
            }
        }
    }

    #[test]
    fn simple_text_floors_at_zero() {
        // 6 words, 2 sentences, 7 syllables: raw grade is about -0.6
        let s = score(6, 2, 7).unwrap();
        assert_eq!(s.grade, 0.0);
    }

    #[test]
    fn never_negative() {
        for (w, s, y) in [(1, 1, 1), (1, 50, 1), (3, 3, 3), (10, 10, 10)] {
            let r = score(w, s, y).unwrap();
            assert!(r.grade >= 0.0, "{w}/{s}/{y} gave {}", r.grade);
            assert!(!r.grade.is_sign_negative());
        }
    }

    #[test]
    fn dense_text_scores_high() {
        let s = score(60, 2, 180).unwrap();
        assert!(s.grade > 16.0);
        assert_eq!(s.description(), "Graduate / academic");
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert_eq!(score(0, 1, 0), Err(AnalysisError::NoContent));
        assert_eq!(score(5, 0, 5), Err(AnalysisError::NoContent));
    }

    #[test]
    fn rounding_uses_decimal_value() {
        assert_eq!(round_to(9.91, 1), 9.9);
        assert_eq!(round_to(8.95, 1), 8.9);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_to(12.0, 1), 12.0);
    }

    #[test]
    fn check_readability_reports_counts() {
        let report = check_readability("The cat sat on the mat. The dog ran fast.", None).unwrap();
        assert_eq!(report.sentences, 2);
        assert_eq!(report.words, 10);
        assert_eq!(report.syllables, 10);
        assert_eq!(report.grade, 0.0);
        assert!(!report.over_max);
    }

    #[test]
    fn check_readability_over_max() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols.";
        let report = check_readability(text, Some(8.0)).unwrap();
        assert!(report.over_max);
        assert_eq!(report.max_grade, Some(8.0));
    }

    #[test]
    fn check_readability_empty_input_errors() {
        assert_eq!(
            check_readability("", None).unwrap_err(),
            AnalysisError::NoContent
        );
    }

    #[test]
    fn reading_level_bounds_are_inclusive() {
        assert_eq!(ReadingLevel::from_grade(0.0), ReadingLevel::Elementary);
        assert_eq!(ReadingLevel::from_grade(5.9), ReadingLevel::Elementary);
        assert_eq!(ReadingLevel::from_grade(6.0), ReadingLevel::MiddleSchool);
        assert_eq!(ReadingLevel::from_grade(9.0), ReadingLevel::HighSchool);
        assert_eq!(ReadingLevel::from_grade(12.0), ReadingLevel::College);
        assert_eq!(ReadingLevel::from_grade(16.0), ReadingLevel::Graduate);
    }
}
