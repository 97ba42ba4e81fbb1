//! Error types for essay-lens-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The trimmed input is shorter than the caller's minimum.
    ///
    /// Raised by [`crate::check_input_length`], which shells call before
    /// handing text to the pipeline.
    #[error(
        "text is too short ({length} characters, minimum {minimum}). \
         Please provide a longer paragraph or essay."
    )]
    InputTooShort {
        /// Trimmed length of the input, in characters.
        length: usize,
        /// Minimum accepted length, in characters.
        minimum: usize,
    },

    /// Tokenization produced no words or no sentences.
    #[error("no analyzable content: input contains no words or no sentences")]
    NoContent,

    /// Unexpected failure inside the pipeline.
    #[error("an error occurred during analysis: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Whether the error was caused by the caller's input rather than the analyzer.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InputTooShort { .. } | Self::NoContent)
    }
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
