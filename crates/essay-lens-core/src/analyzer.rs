//! End-to-end analysis: tokenize, classify, score, and map to a proficiency tier.
//!
//! Two scoring models exist. [`ScoringModel::Ratio`] classifies on sentence
//! length and the share of long words; [`ScoringModel::Grade`] classifies on
//! the Flesch-Kincaid grade and reports syllable statistics. They produce
//! differently shaped reports and are never blended.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::proficiency::{self, ProficiencyTier, TierThresholds};
use crate::readability::{self, round_to};
use crate::syllables;
use crate::text;
use crate::vocabulary::{self, VocabularyReport, VocabularyRule, VocabularyThresholds};

/// Which signals drive the proficiency estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ScoringModel {
    /// Words per sentence plus the fraction of words with 8+ letters.
    #[default]
    Ratio,
    /// Flesch-Kincaid grade plus syllable-aware academic vocabulary.
    Grade,
}

impl ScoringModel {
    /// Returns the model name as used in configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ratio => "ratio",
            Self::Grade => "grade",
        }
    }

    /// Vocabulary predicate paired with this model.
    pub const fn vocabulary_rule(self) -> VocabularyRule {
        match self {
            Self::Ratio => VocabularyRule::Length,
            Self::Grade => VocabularyRule::LengthOrSyllables,
        }
    }

    /// Number of vocabulary words listed in the report unless overridden.
    pub const fn default_sample_size(self) -> usize {
        match self {
            Self::Ratio => 10,
            Self::Grade => 15,
        }
    }

    /// Shortest trimmed input, in characters, that shells should accept.
    pub const fn min_input_chars(self) -> usize {
        match self {
            Self::Ratio => 15,
            Self::Grade => 20,
        }
    }
}

impl std::str::FromStr for ScoringModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ratio" => Ok(Self::Ratio),
            "grade" => Ok(Self::Grade),
            other => Err(format!("unknown scoring model: {other}. Use: ratio, grade")),
        }
    }
}

impl std::fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs for one [`analyze`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOptions {
    /// Scoring model.
    pub model: ScoringModel,
    /// Vocabulary sample size. `None` uses the model's default.
    pub sample_size: Option<usize>,
    /// Word-level vocabulary thresholds.
    pub vocabulary: VocabularyThresholds,
    /// Tier boundaries.
    pub tiers: TierThresholds,
}

impl AnalysisOptions {
    /// Default options for `model`.
    pub fn for_model(model: ScoringModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// Effective vocabulary sample size.
    pub fn sample_size(&self) -> usize {
        self.sample_size
            .unwrap_or_else(|| self.model.default_sample_size())
    }
}

/// Outcome marker carried in every successful report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Analysis completed.
    Success,
}

/// Counts and averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of words.
    pub total_words: usize,
    /// Number of sentences.
    pub total_sentences: usize,
    /// Total estimated syllables (grade model only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_syllables: Option<usize>,
    /// Words per sentence, rounded to 2 decimals.
    pub average_words_per_sentence: f64,
    /// Syllables per word, rounded to 2 decimals (grade model only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_syllables_per_word: Option<f64>,
}

/// Grade level and its description (grade model only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScientificReadability {
    /// Flesch-Kincaid grade, floored at 0, 1 decimal.
    pub flesch_kincaid_grade_level: f64,
    /// School-level description of the grade.
    pub reading_level_description: String,
}

/// Proficiency estimate with long-word vocabulary (ratio model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedVocabularyAnalysis {
    /// CEFR label.
    pub estimated_cefr_level: String,
    /// IELTS band label.
    pub estimated_ielts_band: String,
    /// Distinct advanced words.
    pub advanced_vocabulary_count: usize,
    /// First advanced words in order of appearance.
    pub advanced_vocabulary_extracted: Vec<String>,
}

/// Proficiency estimate with academic vocabulary (grade model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicVocabularyAnalysis {
    /// CEFR label.
    pub estimated_cefr_level: String,
    /// IELTS band label.
    pub estimated_ielts_band: String,
    /// Distinct academic words.
    pub academic_vocabulary_count: usize,
    /// First academic words in order of appearance.
    pub academic_vocabulary_extracted: Vec<String>,
}

/// Model-specific proficiency section. Serializes under `analysis` for the
/// ratio model and `proficiency_analysis` for the grade model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    /// Ratio model section.
    Analysis(AdvancedVocabularyAnalysis),
    /// Grade model section.
    ProficiencyAnalysis(AcademicVocabularyAnalysis),
}

impl Assessment {
    fn new(model: ScoringModel, tier: ProficiencyTier, vocab: VocabularyReport) -> Self {
        let cefr = tier.cefr_level().to_string();
        let ielts = tier.ielts_band().to_string();
        match model {
            ScoringModel::Ratio => Self::Analysis(AdvancedVocabularyAnalysis {
                estimated_cefr_level: cefr,
                estimated_ielts_band: ielts,
                advanced_vocabulary_count: vocab.count,
                advanced_vocabulary_extracted: vocab.sample,
            }),
            ScoringModel::Grade => Self::ProficiencyAnalysis(AcademicVocabularyAnalysis {
                estimated_cefr_level: cefr,
                estimated_ielts_band: ielts,
                academic_vocabulary_count: vocab.count,
                academic_vocabulary_extracted: vocab.sample,
            }),
        }
    }

    /// CEFR label.
    pub fn cefr_level(&self) -> &str {
        match self {
            Self::Analysis(a) => &a.estimated_cefr_level,
            Self::ProficiencyAnalysis(a) => &a.estimated_cefr_level,
        }
    }

    /// IELTS band label.
    pub fn ielts_band(&self) -> &str {
        match self {
            Self::Analysis(a) => &a.estimated_ielts_band,
            Self::ProficiencyAnalysis(a) => &a.estimated_ielts_band,
        }
    }

    /// Distinct vocabulary count.
    pub const fn vocabulary_count(&self) -> usize {
        match self {
            Self::Analysis(a) => a.advanced_vocabulary_count,
            Self::ProficiencyAnalysis(a) => a.academic_vocabulary_count,
        }
    }

    /// Listed vocabulary words.
    pub fn vocabulary_sample(&self) -> &[String] {
        match self {
            Self::Analysis(a) => &a.advanced_vocabulary_extracted,
            Self::ProficiencyAnalysis(a) => &a.academic_vocabulary_extracted,
        }
    }
}

/// Full result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Always [`Status::Success`].
    pub status: Status,
    /// Counts and averages.
    pub metrics: Metrics,
    /// Grade level section (grade model only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_readability: Option<ScientificReadability>,
    /// Proficiency estimate and vocabulary.
    #[serde(flatten)]
    pub assessment: Assessment,
}

impl AnalysisReport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::Internal`] if serialization fails.
    pub fn to_json_pretty(&self) -> AnalysisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::Internal(format!("serialization error: {e}")))
    }
}

/// Reject input whose trimmed length is below `minimum` characters.
///
/// This is the caller-side precondition; [`analyze`] itself only guards
/// against input with no words or sentences.
///
/// # Errors
///
/// [`AnalysisError::InputTooShort`] with the measured and required lengths.
pub fn check_input_length(text: &str, minimum: usize) -> AnalysisResult<()> {
    let length = text.trim().chars().count();
    if length < minimum {
        return Err(AnalysisError::InputTooShort { length, minimum });
    }
    Ok(())
}

/// Analyze one text.
///
/// # Errors
///
/// - [`AnalysisError::NoContent`] if the text has no words or no sentences.
/// - [`AnalysisError::Internal`] if scoring produces a non-finite grade.
#[tracing::instrument(skip(text, options), fields(text_len = text.len(), model = %options.model))]
pub fn analyze(text: &str, options: &AnalysisOptions) -> AnalysisResult<AnalysisReport> {
    let tokens = text::tokenize(text)?;
    let words = tokens.word_count();
    let sentences = tokens.sentence_count();

    let vocab = vocabulary::classify(
        &tokens.words,
        options.model.vocabulary_rule(),
        &options.vocabulary,
        options.sample_size(),
    );

    let (metrics, scientific_readability, tier) = match options.model {
        ScoringModel::Ratio => {
            let avg_words_per_sentence = words as f64 / sentences as f64;
            let tier = proficiency::tier_from_ratios(
                avg_words_per_sentence,
                vocab.count,
                words,
                &options.tiers,
            );
            let metrics = Metrics {
                total_words: words,
                total_sentences: sentences,
                total_syllables: None,
                average_words_per_sentence: round_to(avg_words_per_sentence, 2),
                average_syllables_per_word: None,
            };
            (metrics, None, tier)
        }
        ScoringModel::Grade => {
            let syllable_total = syllables::total_syllables(&tokens.words);
            let score = readability::score(words, sentences, syllable_total)?;
            let tier = proficiency::tier_from_grade(score.grade, &options.tiers);
            let metrics = Metrics {
                total_words: words,
                total_sentences: sentences,
                total_syllables: Some(syllable_total),
                average_words_per_sentence: round_to(score.avg_words_per_sentence, 2),
                average_syllables_per_word: Some(round_to(score.avg_syllables_per_word, 2)),
            };
            let readability = ScientificReadability {
                flesch_kincaid_grade_level: score.grade,
                reading_level_description: score.description().to_string(),
            };
            (metrics, Some(readability), tier)
        }
    };

    tracing::debug!(
        words,
        sentences,
        vocabulary = vocab.count,
        tier = ?tier,
        "analysis complete"
    );

    Ok(AnalysisReport {
        status: Status::Success,
        metrics,
        scientific_readability,
        assessment: Assessment::new(options.model, tier, vocab),
    })
}
