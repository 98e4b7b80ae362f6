//! Input preprocessing for ROC AUC evaluation.
//!
//! Turns raw `(scores, labels)` arrays into one of two validated layouts:
//! a binary problem (`(batch,)` each) or a multi-class problem
//! (`(batch, n_classes)` each). Along the way it
//!
//! - normalizes ranks and squeezes a trailing singleton channel ([`shape`]),
//! - applies sigmoid to scores of any rank, or softmax along the class axis of
//!   multi-channel scores ([`activation`]),
//! - expands class-index labels when `to_onehot_y` is set ([`onehot`]),
//! - collects advisory diagnostics for flags that have no effect.
//!
//! No pairwise work happens here; every shape problem surfaces before the
//! metric kernels run.

pub mod activation;
pub mod onehot;
pub mod shape;

pub use activation::{sigmoid, sigmoid_inplace, softmax_rows_inplace};
pub use onehot::{one_hot, OneHotEncoder};
pub use shape::{normalize, Channels};

use crate::config::{ConfigValidator, Diagnostic, RocAucConfig};
use crate::core::error::Result;
use crate::core::types::*;
use crate::shape_error;
use ndarray::{Array1, Array2, ArrayViewD};

/// Validated input ready for the metric kernels.
#[derive(Debug, Clone, PartialEq)]
pub enum Prepared {
    /// Single-channel scores with matching 0/1 labels
    Binary {
        /// Scores after any sigmoid
        scores: Array1<Score>,
        /// 0/1 labels
        labels: Array1<Label>,
    },
    /// `(batch, n_classes)` scores with a same-shaped indicator matrix
    MultiClass {
        /// Scores after any sigmoid or softmax
        scores: Array2<Score>,
        /// Indicator matrix, one column per class
        labels: Array2<Label>,
    },
}

impl Prepared {
    /// Number of samples
    pub fn batch_size(&self) -> usize {
        match self {
            Prepared::Binary { scores, .. } => scores.len(),
            Prepared::MultiClass { scores, .. } => scores.nrows(),
        }
    }

    /// Number of classes, 1 for binary problems
    pub fn num_classes(&self) -> usize {
        match self {
            Prepared::Binary { .. } => 1,
            Prepared::MultiClass { scores, .. } => scores.ncols(),
        }
    }
}

/// Stateless preprocessor driven by a [`RocAucConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Preprocessor<'a> {
    config: &'a RocAucConfig,
}

impl<'a> Preprocessor<'a> {
    /// Create a preprocessor for the given configuration
    pub fn new(config: &'a RocAucConfig) -> Self {
        Self { config }
    }

    /// Validate and transform raw inputs.
    ///
    /// Returns the prepared problem and any advisory diagnostics.
    pub fn prepare(
        &self,
        scores: ArrayViewD<'_, Score>,
        labels: ArrayViewD<'_, Label>,
    ) -> Result<(Prepared, Vec<Diagnostic>)> {
        let mut scores = normalize(scores, "scores")?;
        let labels = normalize(labels, "labels")?;

        if scores.batch_size() != labels.batch_size() {
            return Err(shape_error!(
                "batch size mismatch: scores have {} samples, labels have {}",
                scores.batch_size(),
                labels.batch_size()
            ));
        }

        if self.config.activation == Activation::Sigmoid {
            match &mut scores {
                Channels::Single(s) => sigmoid_inplace(s),
                Channels::Multi(s) => sigmoid_inplace(s),
            }
        }

        match scores {
            Channels::Single(scores) => {
                let labels = match labels {
                    Channels::Single(labels) => labels,
                    Channels::Multi(m) => {
                        return Err(shape_error!(
                            "scores have one channel but labels have {} columns",
                            m.ncols()
                        ))
                    }
                };
                let diagnostics = ConfigValidator::new(self.config).single_channel();
                log::debug!("Prepared binary problem with {} samples", scores.len());
                Ok((Prepared::Binary { scores, labels }, diagnostics))
            }
            Channels::Multi(mut scores) => {
                let n_classes = scores.ncols();
                let labels = self.prepare_multi_labels(labels, n_classes)?;

                if self.config.activation == Activation::Softmax {
                    softmax_rows_inplace(&mut scores);
                }

                log::debug!(
                    "Prepared multi-class problem with {} samples and {} classes",
                    scores.nrows(),
                    n_classes
                );
                Ok((Prepared::MultiClass { scores, labels }, Vec::new()))
            }
        }
    }

    fn prepare_multi_labels(&self, labels: Channels<Label>, n_classes: usize) -> Result<Array2<Label>> {
        match (labels, self.config.to_onehot_y) {
            (Channels::Single(indices), true) => one_hot(&indices.view(), n_classes),
            (Channels::Multi(m), true) => Err(shape_error!(
                "to_onehot_y expects class indices of shape (batch_size,), got {} label columns",
                m.ncols()
            )),
            (Channels::Multi(m), false) => {
                if m.ncols() != n_classes {
                    return Err(shape_error!(
                        "labels have {} columns but scores have {} classes",
                        m.ncols(),
                        n_classes
                    ));
                }
                Ok(m)
            }
            (Channels::Single(_), false) => Err(shape_error!(
                "labels of shape (batch_size,) need to_onehot_y for {}-class scores",
                n_classes
            )),
        }
    }
}
