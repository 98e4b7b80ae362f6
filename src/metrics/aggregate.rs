//! Multi-class aggregation of binary ROC AUC values.

use crate::core::error::{Result, RocAucError};
use crate::core::types::*;
use crate::metrics::roc_auc::{binary_roc_auc, validate_binary};
use crate::shape_error;
use ndarray::{Array1, ArrayView2, Axis};
use rayon::prelude::*;

/// Check every class column before any pairwise work.
///
/// Each column must hold only 0/1 labels, no NaN scores and at least one
/// positive and one negative. Classes are checked in order, so the error
/// reported is the one for the lowest failing class.
pub fn validate_classes(
    scores: &ArrayView2<'_, Score>,
    labels: &ArrayView2<'_, Label>,
) -> Result<()> {
    check_same_shape(scores, labels)?;
    for class in 0..scores.ncols() {
        let (positives, negatives) =
            validate_binary(&scores.column(class), &labels.column(class))?;
        if positives == 0 || negatives == 0 {
            return Err(RocAucError::undefined_auc(Some(class), positives, negatives));
        }
    }
    Ok(())
}

/// ROC AUC of every class column, in class order.
///
/// The whole matrix is validated first. Columns are independent, so with
/// `parallel` they are evaluated on the rayon pool; results are the same
/// either way.
pub fn per_class_roc_auc(
    scores: &ArrayView2<'_, Score>,
    labels: &ArrayView2<'_, Label>,
    parallel: bool,
) -> Result<Vec<f64>> {
    validate_classes(scores, labels)?;

    let class_auc = |class: ClassIndex| {
        binary_roc_auc(&scores.column(class), &labels.column(class))
            .map_err(|e| e.with_class(class))
    };

    let n_classes = scores.ncols();
    let results: Vec<Result<f64>> = if parallel {
        (0..n_classes).into_par_iter().map(class_auc).collect()
    } else {
        (0..n_classes).map(class_auc).collect()
    };
    results.into_iter().collect()
}

/// Number of positive labels per class (column sums of the indicator matrix).
pub fn positive_counts(labels: &ArrayView2<'_, Label>) -> Array1<f64> {
    labels.map(|&l| l as f64).sum_axis(Axis(0))
}

/// ROC AUC over every (sample, class) pair flattened into one binary problem.
pub fn micro_roc_auc(
    scores: &ArrayView2<'_, Score>,
    labels: &ArrayView2<'_, Label>,
) -> Result<f64> {
    check_same_shape(scores, labels)?;
    let flat_scores: Array1<Score> = scores.iter().copied().collect();
    let flat_labels: Array1<Label> = labels.iter().copied().collect();
    binary_roc_auc(&flat_scores.view(), &flat_labels.view())
}

/// Combine per-class ROC AUC values according to `average`.
pub fn aggregate(
    scores: &ArrayView2<'_, Score>,
    labels: &ArrayView2<'_, Label>,
    average: Average,
    parallel: bool,
) -> Result<AucResult> {
    log::debug!(
        "Aggregating ROC AUC over {} classes with average={}",
        scores.ncols(),
        average
    );

    match average {
        Average::Micro => micro_roc_auc(scores, labels).map(AucResult::Scalar),
        Average::None => per_class_roc_auc(scores, labels, parallel).map(AucResult::PerClass),
        Average::Macro => {
            let auc_values = per_class_roc_auc(scores, labels, parallel)?;
            Ok(AucResult::Scalar(mean(&auc_values)))
        }
        Average::Weighted => {
            let auc_values = per_class_roc_auc(scores, labels, parallel)?;
            let weights = positive_counts(labels);
            Ok(AucResult::Scalar(weighted_mean(&auc_values, &weights.to_vec())))
        }
    }
}

fn check_same_shape(
    scores: &ArrayView2<'_, Score>,
    labels: &ArrayView2<'_, Label>,
) -> Result<()> {
    if scores.dim() != labels.dim() {
        return Err(shape_error!(
            "scores have shape {:?} but labels have shape {:?}",
            scores.dim(),
            labels.dim()
        ));
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().sum();
    values
        .iter()
        .zip(weights)
        .map(|(v, w)| v * w)
        .sum::<f64>()
        / total
}
