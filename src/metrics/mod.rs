//! ROC AUC evaluation metrics.
//!
//! [`RocAucMetric`] runs the whole pipeline: preprocessing, then either the
//! binary kernel ([`roc_auc`]) or multi-class aggregation ([`aggregate`]).
//!
//! # Examples
//!
//! ## Binary
//!
//! ```rust
//! use roc_auc_rust::metrics::RocAucMetric;
//! use roc_auc_rust::RocAucConfig;
//! use ndarray::arr1;
//!
//! # fn example() -> roc_auc_rust::Result<()> {
//! let metric = RocAucMetric::new(RocAucConfig::default());
//! let scores = arr1(&[0.1, 0.4, 0.35, 0.8]);
//! let labels = arr1(&[0.0, 0.0, 1.0, 1.0]);
//!
//! let evaluation = metric.evaluate_binary(&scores.view(), &labels.view())?;
//! assert_eq!(evaluation.result.value(), 0.75);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Multi-class
//!
//! ```rust
//! use roc_auc_rust::metrics::RocAucMetric;
//! use roc_auc_rust::{Average, ConfigBuilder};
//! use ndarray::{arr1, arr2};
//!
//! # fn example() -> roc_auc_rust::Result<()> {
//! let config = ConfigBuilder::new()
//!     .to_onehot_y(true)
//!     .add_softmax(true)
//!     .average(Average::None)
//!     .build()?;
//! let metric = RocAucMetric::new(config);
//!
//! let scores = arr2(&[[2.0, 0.5], [0.1, 1.5], [1.0, 0.2], [0.3, 0.9]]);
//! let labels = arr1(&[0.0, 1.0, 0.0, 1.0]);
//!
//! let evaluation = metric.evaluate(scores.view().into_dyn(), labels.view().into_dyn())?;
//! assert_eq!(evaluation.result.per_class().unwrap().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod aggregate;
pub mod roc_auc;

pub use aggregate::{aggregate, micro_roc_auc, per_class_roc_auc, positive_counts, validate_classes};
pub use roc_auc::{binary_roc_auc, compare_pairs, validate_binary, PairwiseComparison};

use crate::config::{Diagnostic, RocAucConfig};
use crate::core::error::Result;
use crate::core::types::*;
use crate::preprocessing::{Prepared, Preprocessor};
use ndarray::{ArrayView1, ArrayView2, ArrayViewD};
use serde::{Deserialize, Serialize};

/// Result of an evaluation together with its advisory diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Computed ROC AUC
    pub result: AucResult,
    /// Non-fatal notes, e.g. flags ignored for single-channel scores
    pub diagnostics: Vec<Diagnostic>,
}

/// Stateless ROC AUC evaluator.
///
/// Holds only its configuration; every call is independent and the metric can
/// be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RocAucMetric {
    config: RocAucConfig,
}

impl RocAucMetric {
    /// Create a new evaluator
    pub fn new(config: RocAucConfig) -> Self {
        Self { config }
    }

    /// Metric name
    pub fn name(&self) -> &'static str {
        "auc"
    }

    /// Higher values are better
    pub fn higher_is_better(&self) -> bool {
        true
    }

    /// Get the configuration
    pub fn config(&self) -> &RocAucConfig {
        &self.config
    }

    /// Evaluate scores of shape `(batch,)` or `(batch, n_classes)` against
    /// labels of shape `(batch,)`, `(batch, 1)` or `(batch, n_classes)`.
    pub fn evaluate(
        &self,
        scores: ArrayViewD<'_, Score>,
        labels: ArrayViewD<'_, Label>,
    ) -> Result<Evaluation> {
        let (prepared, diagnostics) = Preprocessor::new(&self.config).prepare(scores, labels)?;

        let result = match prepared {
            Prepared::Binary { scores, labels } => {
                AucResult::Scalar(binary_roc_auc(&scores.view(), &labels.view())?)
            }
            Prepared::MultiClass { scores, labels } => aggregate(
                &scores.view(),
                &labels.view(),
                self.config.average,
                self.config.parallel,
            )?,
        };

        log::debug!("ROC AUC = {}", result);
        Ok(Evaluation {
            result,
            diagnostics,
        })
    }

    /// Evaluate single-channel scores.
    pub fn evaluate_binary(
        &self,
        scores: &ArrayView1<'_, Score>,
        labels: &ArrayView1<'_, Label>,
    ) -> Result<Evaluation> {
        self.evaluate(scores.view().into_dyn(), labels.view().into_dyn())
    }

    /// Evaluate `(batch, n_classes)` scores against a label matrix.
    ///
    /// With `to_onehot_y` the label matrix is expected to be `(batch, 1)` class indices.
    pub fn evaluate_multiclass(
        &self,
        scores: &ArrayView2<'_, Score>,
        labels: &ArrayView2<'_, Label>,
    ) -> Result<Evaluation> {
        self.evaluate(scores.view().into_dyn(), labels.view().into_dyn())
    }
}
