//! Common test utilities for ROC AUC integration tests.

#![allow(dead_code)]

use ndarray::{Array1, Array2};
use rand::prelude::*;

/// Initialize logging once for the test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create binary labels and noisy scores correlated with them.
///
/// The first two samples are forced to one positive and one negative so the
/// problem is always defined.
pub fn create_binary_problem(num_samples: usize, seed: u64) -> (Array1<f32>, Array1<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut labels = Array1::zeros(num_samples);
    let mut scores = Array1::zeros(num_samples);
    for i in 0..num_samples {
        let label = match i {
            0 => 1.0,
            1 => 0.0,
            _ => if rng.gen_bool(0.4) { 1.0 } else { 0.0 },
        };
        labels[i] = label;
        scores[i] = label * 0.5 + rng.gen_range(0.0..1.0);
    }

    (scores, labels)
}

/// Create `(batch, num_classes)` logits and class-index labels.
///
/// Every class appears at least once and is absent at least once.
pub fn create_multiclass_problem(
    num_samples: usize,
    num_classes: usize,
    seed: u64,
) -> (Array2<f32>, Array1<f32>) {
    assert!(num_samples >= num_classes && num_classes >= 2);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut labels = Array1::zeros(num_samples);
    let mut scores = Array2::zeros((num_samples, num_classes));
    for i in 0..num_samples {
        let class = if i < num_classes {
            i
        } else {
            rng.gen_range(0..num_classes)
        };
        labels[i] = class as f32;
        for c in 0..num_classes {
            let signal = if c == class { 1.0 } else { 0.0 };
            scores[[i, c]] = signal + rng.gen_range(-1.0..1.0);
        }
    }

    (scores, labels)
}

/// Expand class indices into an indicator matrix.
pub fn indicator_matrix(labels: &Array1<f32>, num_classes: usize) -> Array2<f32> {
    let mut matrix = Array2::zeros((labels.len(), num_classes));
    for (i, &label) in labels.iter().enumerate() {
        matrix[[i, label as usize]] = 1.0;
    }
    matrix
}

/// Reference ROC AUC from average ranks (ties share the mean rank).
pub fn rank_sum_auc(scores: &[f32], labels: &[f32]) -> f64 {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap());

    let mut ranks = vec![0.0f64; scores.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j < order.len() && scores[order[j]] == scores[order[i]] {
            j += 1;
        }
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for k in i..j {
            ranks[order[k]] = avg_rank;
        }
        i = j;
    }

    let positives = labels.iter().filter(|&&l| l == 1.0).count() as f64;
    let negatives = labels.len() as f64 - positives;
    let rank_sum: f64 = ranks
        .iter()
        .zip(labels)
        .filter(|&(_, &l)| l == 1.0)
        .map(|(r, _)| r)
        .sum();

    (rank_sum - positives * (positives + 1.0) / 2.0) / (positives * negatives)
}
