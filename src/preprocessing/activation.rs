//! Score activations applied before ranking.

use ndarray::{Array2, ArrayBase, Axis, DataMut, Dimension};
use num_traits::Float;

/// Numerically stable logistic sigmoid.
#[inline]
pub fn sigmoid<F: Float>(x: F) -> F {
    if x >= F::zero() {
        F::one() / (F::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (F::one() + e)
    }
}

/// Apply sigmoid to every element in place.
pub fn sigmoid_inplace<F, S, D>(scores: &mut ArrayBase<S, D>)
where
    F: Float,
    S: DataMut<Elem = F>,
    D: Dimension,
{
    scores.mapv_inplace(sigmoid);
}

/// Apply softmax along the class axis (axis 1) of a `(batch, n_classes)` matrix, in place.
///
/// Each row is shifted by its maximum before exponentiation.
pub fn softmax_rows_inplace<F: Float>(scores: &mut Array2<F>) {
    for mut row in scores.axis_iter_mut(Axis(0)) {
        let max = row.iter().fold(F::neg_infinity(), |m, &v| m.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.iter().fold(F::zero(), |s, &v| s + v);
        row.mapv_inplace(|v| v / sum);
    }
}
