//! # ROC AUC for Rust
//!
//! Area Under the Receiver-Operating-Characteristic Curve for binary and
//! multi-class classifiers, computed on `ndarray` inputs.
//!
//! ## Features
//!
//! - **Exact pairwise kernel**: every (positive, negative) pair is compared
//!   directly, ties count one half. The value is the normalized Mann-Whitney U
//!   statistic.
//! - **Multi-class averaging**: macro, positive-count weighted, micro
//!   (flattened) or per-class values.
//! - **Preprocessing**: optional sigmoid or softmax on scores, one-hot
//!   expansion of class-index labels, explicit rank normalization.
//! - **Diagnostics instead of global warnings**: ignored flags are returned
//!   with the result and logged through the `log` facade.
//!
//! ## Quick Start
//!
//! ```rust
//! use roc_auc_rust::{compute_roc_auc, AucResult, RocAucConfig};
//! use ndarray::arr1;
//!
//! # fn main() -> roc_auc_rust::Result<()> {
//! let scores = arr1(&[0.1, 0.4, 0.35, 0.8]);
//! let labels = arr1(&[0.0, 0.0, 1.0, 1.0]);
//!
//! let auc = compute_roc_auc(
//!     scores.view().into_dyn(),
//!     labels.view().into_dyn(),
//!     &RocAucConfig::default(),
//! )?;
//! assert_eq!(auc, AucResult::Scalar(0.75));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: numeric aliases, averaging/activation enums, errors
//! - [`config`]: configuration, builder, file/env loading, diagnostics
//! - [`preprocessing`]: shape normalization, activations, one-hot encoding
//! - [`metrics`]: binary kernel, multi-class aggregation, evaluator

#![doc(html_root_url = "https://docs.rs/roc-auc-rust/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Input preprocessing module
pub mod preprocessing;

// Metrics evaluation module
pub mod metrics;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{Result, RocAucError},
    types::*,
};

// Re-export configuration functionality
pub use config::{ConfigBuilder, ConfigValidator, Diagnostic, DiagnosticKind, RocAucConfig};

// Re-export preprocessing functionality
pub use preprocessing::{one_hot, Channels, OneHotEncoder, Prepared, Preprocessor};

// Re-export metrics functionality
pub use metrics::{
    aggregate, binary_roc_auc, compare_pairs, validate_binary, validate_classes, Evaluation,
    PairwiseComparison, RocAucMetric,
};

use ndarray::ArrayViewD;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compute ROC AUC for `scores` of shape `(batch,)` or `(batch, n_classes)`.
///
/// `labels` may be `(batch,)`, `(batch, 1)` or `(batch, n_classes)`. Binary
/// input and averaged multi-class input return [`AucResult::Scalar`];
/// `Average::None` on multi-class input returns [`AucResult::PerClass`].
///
/// Advisory diagnostics are logged and dropped; use [`RocAucMetric::evaluate`]
/// to receive them.
///
/// # Errors
///
/// See [`RocAucError`]. Every error is raised before any pairwise comparison.
pub fn compute_roc_auc(
    scores: ArrayViewD<'_, Score>,
    labels: ArrayViewD<'_, Label>,
    config: &RocAucConfig,
) -> Result<AucResult> {
    RocAucMetric::new(*config)
        .evaluate(scores, labels)
        .map(|evaluation| evaluation.result)
}
