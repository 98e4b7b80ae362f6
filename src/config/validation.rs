//! Advisory checks of a configuration against the shape of the input it is
//! applied to.
//!
//! Some flag combinations are meaningless for a given input but harmless, for
//! example `to_onehot_y` on single-channel scores. These are reported as
//! [`Diagnostic`] values returned to the caller and logged with `log::warn!`;
//! they never fail the computation.

use crate::config::core::RocAucConfig;
use crate::core::types::Activation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of advisory diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// `to_onehot_y` was requested but scores have a single channel
    OneHotIgnored,
    /// `add_softmax` was requested but scores have a single channel
    SoftmaxIgnored,
}

/// Non-fatal note produced while evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic kind
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic
    pub fn new<S: Into<String>>(kind: DiagnosticKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Checks a configuration against the channel layout of the scores.
#[derive(Debug, Clone, Copy)]
pub struct ConfigValidator<'a> {
    config: &'a RocAucConfig,
}

impl<'a> ConfigValidator<'a> {
    /// Create a validator for the given configuration
    pub fn new(config: &'a RocAucConfig) -> Self {
        Self { config }
    }

    /// Flags that have no effect on single-channel scores.
    pub fn single_channel(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.config.to_onehot_y {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::OneHotIgnored,
                "scores have only one channel, to_onehot_y=true ignored",
            ));
        }
        if self.config.activation == Activation::Softmax {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::SoftmaxIgnored,
                "scores have only one channel, add_softmax=true ignored",
            ));
        }

        for diagnostic in &diagnostics {
            log::warn!("{}", diagnostic);
        }
        diagnostics
    }
}
