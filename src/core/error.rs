//! Error handling and error types for ROC AUC evaluation.
//!
//! Every failure is detected before any pairwise comparison work begins and is
//! fatal to the call. The computation is pure, so none of these errors is
//! recoverable by retrying with the same inputs.

use std::io;
use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum RocAucError {
    /// Label outside {0, 1}, or a class index that cannot be one-hot encoded
    #[error("Invalid label at index {index}: {value}")]
    InvalidLabel {
        /// Sample position
        index: usize,
        /// Offending label value
        value: f64,
    },

    /// NaN score; NaN has no ordering against other scores
    #[error("Invalid score at index {index}: {value}")]
    InvalidScore {
        /// Sample position
        index: usize,
        /// Offending score value
        value: f64,
    },

    /// Unsupported rank, mismatched batch length or class count
    #[error("Shape error: {message}")]
    Shape {
        /// What did not match
        message: String,
    },

    /// Both softmax and sigmoid requested
    #[error("add_softmax and add_sigmoid are mutually exclusive")]
    ConflictingTransform,

    /// Averaging policy not recognized
    #[error("Unsupported average method: {value}")]
    UnsupportedAverage {
        /// Name as given by the caller
        value: String,
    },

    /// Zero positives or zero negatives, so the pairwise ratio has no denominator
    #[error("ROC AUC is undefined{}: {positives} positive and {negatives} negative samples", class_suffix(.class))]
    UndefinedAuc {
        /// Class column, `None` for binary and micro problems
        class: Option<usize>,
        /// Number of positive samples
        positives: usize,
        /// Number of negative samples
        negatives: usize,
    },

    /// Configuration loading and validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying serde_json error
        #[from]
        source: serde_json::Error,
    },

    /// TOML deserialization errors
    #[error("TOML error: {source}")]
    Toml {
        /// Underlying TOML parse error
        #[from]
        source: toml::de::Error,
    },
}

fn class_suffix(class: &Option<usize>) -> String {
    match class {
        Some(c) => format!(" for class {}", c),
        None => String::new(),
    }
}

/// Type alias for Results using RocAucError
pub type Result<T> = std::result::Result<T, RocAucError>;

/// Utility functions for error handling
impl RocAucError {
    /// Create a shape error
    pub fn shape<S: Into<String>>(message: S) -> Self {
        RocAucError::Shape {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        RocAucError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid label error
    pub fn invalid_label(index: usize, value: f64) -> Self {
        RocAucError::InvalidLabel { index, value }
    }

    /// Create an invalid score error
    pub fn invalid_score(index: usize, value: f64) -> Self {
        RocAucError::InvalidScore { index, value }
    }

    /// Create an unsupported average error
    pub fn unsupported_average<S: Into<String>>(value: S) -> Self {
        RocAucError::UnsupportedAverage {
            value: value.into(),
        }
    }

    /// Create an undefined AUC error
    pub fn undefined_auc(class: Option<usize>, positives: usize, negatives: usize) -> Self {
        RocAucError::UndefinedAuc {
            class,
            positives,
            negatives,
        }
    }

    /// Attach a class index to an undefined AUC error raised by the binary kernel.
    pub fn with_class(self, class: usize) -> Self {
        match self {
            RocAucError::UndefinedAuc {
                positives,
                negatives,
                ..
            } => RocAucError::UndefinedAuc {
                class: Some(class),
                positives,
                negatives,
            },
            other => other,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            RocAucError::InvalidLabel { .. } => "invalid_label",
            RocAucError::InvalidScore { .. } => "invalid_score",
            RocAucError::Shape { .. } => "shape",
            RocAucError::ConflictingTransform => "conflicting_transform",
            RocAucError::UnsupportedAverage { .. } => "unsupported_average",
            RocAucError::UndefinedAuc { .. } => "undefined_auc",
            RocAucError::Config { .. } => "config",
            RocAucError::IO { .. } => "io",
            RocAucError::Json { .. } => "json",
            RocAucError::Toml { .. } => "toml",
        }
    }

    /// Whether the error stems from the caller's data rather than configuration or I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RocAucError::InvalidLabel { .. }
                | RocAucError::InvalidScore { .. }
                | RocAucError::Shape { .. }
                | RocAucError::UndefinedAuc { .. }
        )
    }
}

/// Convenience macro for shape errors
#[macro_export]
macro_rules! shape_error {
    ($msg:expr) => {
        $crate::core::error::RocAucError::shape($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::RocAucError::shape(format!($fmt, $($arg)*))
    };
}
