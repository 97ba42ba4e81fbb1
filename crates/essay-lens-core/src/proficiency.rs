//! Mapping text signals to CEFR levels and IELTS bands.
//!
//! Three tiers only. Every lower bound is inclusive for the grade-driven
//! mapping; the vocabulary fractions of the ratio-driven mapping are strict.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grade at or above which text is [`ProficiencyTier::Advanced`].
pub const ADVANCED_MIN_GRADE: f64 = 12.0;
/// Grade at or above which text is [`ProficiencyTier::UpperIntermediate`].
pub const UPPER_INTERMEDIATE_MIN_GRADE: f64 = 9.0;
/// Words per sentence required for [`ProficiencyTier::Advanced`].
pub const ADVANCED_MIN_WORDS_PER_SENTENCE: f64 = 14.0;
/// Advanced-word fraction that must be exceeded for [`ProficiencyTier::Advanced`].
pub const ADVANCED_VOCABULARY_FRACTION: f64 = 0.10;
/// Words per sentence required for [`ProficiencyTier::UpperIntermediate`].
pub const UPPER_INTERMEDIATE_MIN_WORDS_PER_SENTENCE: f64 = 10.0;
/// Advanced-word fraction that must be exceeded for [`ProficiencyTier::UpperIntermediate`].
pub const UPPER_INTERMEDIATE_VOCABULARY_FRACTION: f64 = 0.05;

/// Proficiency tier, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProficiencyTier {
    /// B1, IELTS 5.0 to 5.5.
    Intermediate,
    /// B2, IELTS 6.0 to 7.0.
    UpperIntermediate,
    /// C1/C2, IELTS 7.5 and above.
    Advanced,
}

impl ProficiencyTier {
    /// CEFR label for this tier.
    pub const fn cefr_level(self) -> &'static str {
        match self {
            Self::Intermediate => "B1 (Intermediate)",
            Self::UpperIntermediate => "B2 (Upper Intermediate)",
            Self::Advanced => "C1/C2 (Advanced/Proficient)",
        }
    }

    /// IELTS band label for this tier.
    pub const fn ielts_band(self) -> &'static str {
        match self {
            Self::Intermediate => "5.0 - 5.5",
            Self::UpperIntermediate => "6.0 - 7.0",
            Self::Advanced => "7.5+",
        }
    }
}

impl std::fmt::Display for ProficiencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cefr_level())
    }
}

/// Tier boundaries for both mappings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TierThresholds {
    /// Minimum grade for the advanced tier.
    pub advanced_min_grade: f64,
    /// Minimum grade for the upper-intermediate tier.
    pub upper_intermediate_min_grade: f64,
    /// Minimum words per sentence for the advanced tier.
    pub advanced_min_words_per_sentence: f64,
    /// Advanced-word fraction to exceed for the advanced tier.
    pub advanced_vocabulary_fraction: f64,
    /// Minimum words per sentence for the upper-intermediate tier.
    pub upper_intermediate_min_words_per_sentence: f64,
    /// Advanced-word fraction to exceed for the upper-intermediate tier.
    pub upper_intermediate_vocabulary_fraction: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            advanced_min_grade: ADVANCED_MIN_GRADE,
            upper_intermediate_min_grade: UPPER_INTERMEDIATE_MIN_GRADE,
            advanced_min_words_per_sentence: ADVANCED_MIN_WORDS_PER_SENTENCE,
            advanced_vocabulary_fraction: ADVANCED_VOCABULARY_FRACTION,
            upper_intermediate_min_words_per_sentence: UPPER_INTERMEDIATE_MIN_WORDS_PER_SENTENCE,
            upper_intermediate_vocabulary_fraction: UPPER_INTERMEDIATE_VOCABULARY_FRACTION,
        }
    }
}

/// Tier from a (rounded) Flesch-Kincaid grade.
pub fn tier_from_grade(grade: f64, thresholds: &TierThresholds) -> ProficiencyTier {
    if grade >= thresholds.advanced_min_grade {
        ProficiencyTier::Advanced
    } else if grade >= thresholds.upper_intermediate_min_grade {
        ProficiencyTier::UpperIntermediate
    } else {
        ProficiencyTier::Intermediate
    }
}

/// Tier from sentence length and the share of advanced words.
///
/// `avg_words_per_sentence` must be the unrounded average.
pub fn tier_from_ratios(
    avg_words_per_sentence: f64,
    advanced_count: usize,
    word_count: usize,
    thresholds: &TierThresholds,
) -> ProficiencyTier {
    let advanced = advanced_count as f64;
    let words = word_count as f64;

    if avg_words_per_sentence >= thresholds.advanced_min_words_per_sentence
        && advanced > words * thresholds.advanced_vocabulary_fraction
    {
        ProficiencyTier::Advanced
    } else if avg_words_per_sentence >= thresholds.upper_intermediate_min_words_per_sentence
        && advanced > words * thresholds.upper_intermediate_vocabulary_fraction
    {
        ProficiencyTier::UpperIntermediate
    } else {
        ProficiencyTier::Intermediate
    }
}
