//! Binary ROC AUC via direct pairwise comparison.
//!
//! For every (positive, negative) pair the comparator scores 1 when the
//! positive is ranked higher, 0.5 on a tie and 0 otherwise. The sum over all
//! pairs divided by `|pos| * |neg|` is the normalized Mann-Whitney U statistic,
//! which equals the area under the ROC curve.
//!
//! The kernel is `O(|pos| * |neg|)`: it compares every pair instead of sorting
//! and summing ranks. It is exact and simple but slows down quadratically on
//! large batches.

use crate::core::constants::*;
use crate::core::error::{Result, RocAucError};
use crate::core::types::*;
use crate::shape_error;
use ndarray::ArrayView1;
use std::cmp::Ordering;

/// Outcome counts of every (positive, negative) comparison.
///
/// Only [`compare_pairs`] builds one, so `wins + ties` never exceeds the pair count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairwiseComparison {
    positives: usize,
    negatives: usize,
    wins: u64,
    ties: u64,
}

impl PairwiseComparison {
    /// Number of positive samples
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Number of negative samples
    pub fn negatives(&self) -> usize {
        self.negatives
    }

    /// Pairs where the positive scored higher
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Pairs with equal scores
    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// Total number of compared pairs
    pub fn num_pairs(&self) -> u64 {
        self.positives as u64 * self.negatives as u64
    }

    /// Pairs where the positive scored lower
    pub fn losses(&self) -> u64 {
        self.num_pairs() - self.wins - self.ties
    }

    /// Normalized U statistic. Fails when either population is empty.
    pub fn auc(&self) -> Result<f64> {
        if self.positives == 0 || self.negatives == 0 {
            return Err(RocAucError::undefined_auc(None, self.positives, self.negatives));
        }
        let total = self.wins as f64 * PAIR_WIN
            + self.ties as f64 * PAIR_TIE
            + self.losses() as f64 * PAIR_LOSS;
        Ok(total / self.num_pairs() as f64)
    }
}

/// Check one binary problem without comparing any pair.
///
/// Rejects a length mismatch, labels outside {0, 1} and NaN scores, in sample
/// order. Returns the positive and negative counts.
pub fn validate_binary(
    scores: &ArrayView1<'_, Score>,
    labels: &ArrayView1<'_, Label>,
) -> Result<(usize, usize)> {
    if scores.len() != labels.len() {
        return Err(shape_error!(
            "scores have {} samples, labels have {}",
            scores.len(),
            labels.len()
        ));
    }

    let mut positives = 0;
    for (i, (&score, &label)) in scores.iter().zip(labels.iter()).enumerate() {
        if label == 1.0 {
            positives += 1;
        } else if label != 0.0 {
            return Err(RocAucError::invalid_label(i, label as f64));
        }
        if score.is_nan() {
            return Err(RocAucError::invalid_score(i, score as f64));
        }
    }
    Ok((positives, labels.len() - positives))
}

fn partition(
    scores: &ArrayView1<'_, Score>,
    labels: &ArrayView1<'_, Label>,
) -> Result<(Vec<Score>, Vec<Score>)> {
    let (positives, negatives) = validate_binary(scores, labels)?;
    let mut pos = Vec::with_capacity(positives);
    let mut neg = Vec::with_capacity(negatives);
    for (&score, &label) in scores.iter().zip(labels.iter()) {
        if label == 1.0 {
            pos.push(score);
        } else {
            neg.push(score);
        }
    }
    Ok((pos, neg))
}

/// Count wins and ties between every positive and every negative.
pub fn compare_pairs(
    scores: &ArrayView1<'_, Score>,
    labels: &ArrayView1<'_, Label>,
) -> Result<PairwiseComparison> {
    let (pos, neg) = partition(scores, labels)?;

    let mut comparison = PairwiseComparison {
        positives: pos.len(),
        negatives: neg.len(),
        ..Default::default()
    };
    if comparison.num_pairs() > LARGE_PAIR_COUNT as u64 {
        log::debug!(
            "Pairwise ROC AUC over {} x {} samples ({} comparisons)",
            pos.len(),
            neg.len(),
            comparison.num_pairs()
        );
    }

    for &p in &pos {
        for &n in &neg {
            match p.partial_cmp(&n) {
                Some(Ordering::Greater) => comparison.wins += 1,
                Some(Ordering::Equal) => comparison.ties += 1,
                _ => {}
            }
        }
    }

    Ok(comparison)
}

/// ROC AUC of a single binary problem.
///
/// `labels` must contain only 0 and 1 and both values must be present; see
/// [`RocAucError::InvalidLabel`] and [`RocAucError::UndefinedAuc`].
pub fn binary_roc_auc(
    scores: &ArrayView1<'_, Score>,
    labels: &ArrayView1<'_, Label>,
) -> Result<f64> {
    compare_pairs(scores, labels)?.auc()
}
