//! Core library for essay-lens.
//!
//! A stateless pipeline that turns a block of English prose into word and
//! sentence statistics, a Flesch-Kincaid grade, an advanced-vocabulary sample,
//! and a CEFR level with its IELTS band.
//!
//! # Modules
//!
//! - [`text`] - Word and sentence tokenization
//! - [`syllables`] - Heuristic syllable estimation
//! - [`readability`] - Flesch-Kincaid grade scoring
//! - [`vocabulary`] - Advanced vocabulary detection
//! - [`proficiency`] - CEFR/IELTS tier mapping
//! - [`analyzer`] - The full pipeline and its report
//! - [`markdown`] - Markdown to prose conversion
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use essay_lens_core::{AnalysisOptions, ScoringModel, analyze};
//!
//! let report = analyze(
//!     "The cat sat. It was happy.",
//!     &AnalysisOptions::for_model(ScoringModel::Ratio),
//! )
//! .expect("text has words and sentences");
//!
//! assert_eq!(report.metrics.total_words, 6);
//! assert_eq!(report.assessment.cefr_level(), "B1 (Intermediate)");
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod markdown;
pub mod proficiency;
pub mod readability;
pub mod syllables;
pub mod text;
pub mod vocabulary;

pub use analyzer::{AnalysisOptions, AnalysisReport, ScoringModel, analyze, check_input_length};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use proficiency::ProficiencyTier;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
